//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed [`StudentStore`](crate::port::StudentStore)
//! implementation using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteStudentStore;
