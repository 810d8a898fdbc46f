//! SQLite database modules.
//!
//! Connection setup, schema definitions, and Diesel model types.

pub mod connection;
pub mod model;
pub mod schema;
