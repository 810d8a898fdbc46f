//! The student record entity.

use serde::Serialize;

use super::error::DomainError;

/// Maximum length of a student name, in characters.
pub const NAME_MAX_CHARS: usize = 50;

/// A single row of the `student` table.
///
/// `roll` is the primary key. `marks` carries no range constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub roll: i32,
    pub name: String,
    pub marks: i32,
}

impl Student {
    /// Build a record, rejecting names that do not fit the name column.
    ///
    /// # Errors
    /// Returns [`DomainError::NameTooLong`] when `name` exceeds
    /// [`NAME_MAX_CHARS`] characters.
    pub fn try_new(roll: i32, name: impl Into<String>, marks: i32) -> Result<Self, DomainError> {
        let name = validate_name(name.into())?;
        Ok(Self { roll, name, marks })
    }
}

/// Check a name against the column width.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
/// Returns [`DomainError::NameTooLong`] when the name is too long.
pub fn validate_name(name: String) -> Result<String, DomainError> {
    let len = name.chars().count();
    if len > NAME_MAX_CHARS {
        return Err(DomainError::NameTooLong {
            len,
            max: NAME_MAX_CHARS,
        });
    }
    Ok(name)
}
