//! Parsing of typed console answers.

use thiserror::Error;

use crate::domain::student::validate_name;
use crate::domain::DomainError;

/// An answer that cannot be used; the session asks again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{input}' is not a whole number, try again")]
    NotANumber { input: String },

    #[error("{0}, try again")]
    Invalid(#[from] DomainError),
}

/// Parse a whole number, ignoring surrounding whitespace.
///
/// # Errors
/// Returns [`InputError::NotANumber`] for anything that is not an `i32`.
pub fn parse_number(answer: &str) -> Result<i32, InputError> {
    answer
        .trim()
        .parse::<i32>()
        .map_err(|_| InputError::NotANumber {
            input: answer.trim().to_string(),
        })
}

/// Accept a name as typed, provided it fits the name column.
///
/// # Errors
/// Returns [`InputError::Invalid`] when the name is too long.
pub fn parse_name(answer: String) -> Result<String, InputError> {
    Ok(validate_name(answer)?)
}
