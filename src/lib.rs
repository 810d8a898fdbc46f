//! Rollbook - a menu-driven student record manager.
//!
//! Keeps a single `student(roll, name, marks)` table in SQLite and offers
//! add, view, edit, and delete through an interactive menu or scripted
//! subcommands.
//!
//! # Architecture
//!
//! - [`domain`] - The [`Student`](domain::Student) record and its invariants
//! - [`port`] - Traits at the edges: [`StudentStore`](port::StudentStore), [`Prompt`](port::Prompt)
//! - [`application`] - [`RecordManager`](application::RecordManager), the only path to the table
//! - [`adapter`] - SQLite store (Diesel), console session, and CLI
//! - [`infrastructure`] - Configuration, logging, and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use rollbook::adapter::outbound::sqlite::SqliteStudentStore;
//! use rollbook::application::RecordManager;
//! use rollbook::domain::Student;
//!
//! fn main() -> rollbook::error::Result<()> {
//!     let mut records = RecordManager::open(SqliteStudentStore::open("college.db")?)?;
//!     records.add(&Student::try_new(1, "Alice", 90)?)?;
//!     records.edit(1, 95)?;
//!     println!("{:?}", records.view()?);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
