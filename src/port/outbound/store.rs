//! Persistence port for student records.

use crate::domain::Student;
use crate::error::Result;

/// Storage operations for student records.
///
/// Every mutating call commits on its own; implementations must not hold a
/// transaction open across calls. Methods take `&mut self` because a store
/// owns exactly one live connection.
pub trait StudentStore {
    /// Create the `student` table if it is absent and verify its shape.
    fn initialize(&mut self) -> Result<()>;

    /// Insert a new record. Fails with `Error::DuplicateRoll` if the roll exists.
    fn insert(&mut self, student: &Student) -> Result<()>;

    /// All records in storage order.
    fn all(&mut self) -> Result<Vec<Student>>;

    /// Set the marks of the record with `roll`. Returns rows affected.
    fn update_marks(&mut self, roll: i32, marks: i32) -> Result<usize>;

    /// Remove the record with `roll`. Returns rows affected.
    fn delete(&mut self, roll: i32) -> Result<usize>;
}
