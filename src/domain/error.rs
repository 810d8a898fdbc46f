//! Domain validation errors for student records.
//!
//! These errors are returned by `try_new` constructors when a value would
//! violate the column constraints of the `student` table.
//!
//! # Examples
//!
//! ```
//! use rollbook::domain::error::DomainError;
//! use rollbook::domain::student::Student;
//!
//! let result = Student::try_new(1, "x".repeat(51), 90);
//! assert!(matches!(result, Err(DomainError::NameTooLong { len: 51, max: 50 })));
//! ```

use thiserror::Error;

/// Errors that occur when record invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Names are stored in a `VARCHAR(50)` column.
    #[error("name is {len} characters long, at most {max} are allowed")]
    NameTooLong {
        /// Length of the rejected name, in characters.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },
}
