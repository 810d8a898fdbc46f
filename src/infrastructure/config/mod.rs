//! Configuration loading and validation.
//!
//! - [`settings`] - Main configuration struct and loading logic
//! - [`database`] - Database location
//! - [`logging`] - Tracing subscriber setup

pub mod database;
pub mod logging;
pub mod settings;

pub use settings::Config;
