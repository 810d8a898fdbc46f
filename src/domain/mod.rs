//! Storage-agnostic record types.

pub mod error;
pub mod student;

pub use error::DomainError;
pub use student::{Student, NAME_MAX_CHARS};
