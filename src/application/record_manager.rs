//! Record management service.
//!
//! Mediates every read and write of student records through a single
//! [`StudentStore`]. Each operation commits independently.

use tracing::{debug, info, warn};

use crate::domain::Student;
use crate::error::{Error, Result};
use crate::port::StudentStore;

/// Record manager owning the store and its connection.
///
/// Dropping the manager drops the store, which releases the connection on
/// every exit path.
pub struct RecordManager<S> {
    store: S,
}

impl<S: StudentStore> RecordManager<S> {
    /// Wrap a store. Call [`initialize`](Self::initialize) before use.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Wrap a store and make sure the student table exists.
    ///
    /// # Errors
    /// Returns an error if the table cannot be created or has an
    /// incompatible shape.
    pub fn open(store: S) -> Result<Self> {
        let mut manager = Self::new(store);
        manager.initialize()?;
        Ok(manager)
    }

    /// Create the student table if it is absent.
    ///
    /// # Errors
    /// Returns [`Error::Schema`] if an incompatible table already exists.
    pub fn initialize(&mut self) -> Result<()> {
        self.store.initialize()?;
        debug!("Student table ready");
        Ok(())
    }

    /// Insert a new record.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateRoll`] if `student.roll` is already taken;
    /// the stored row is left as it was.
    pub fn add(&mut self, student: &Student) -> Result<()> {
        match self.store.insert(student) {
            Ok(()) => {
                info!(roll = student.roll, "Record added");
                Ok(())
            }
            Err(e @ Error::DuplicateRoll { .. }) => {
                warn!(roll = student.roll, "Roll already exists");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Every stored record, in storage order.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if the query fails.
    pub fn view(&mut self) -> Result<Vec<Student>> {
        let records = self.store.all()?;
        debug!(count = records.len(), "Records loaded");
        Ok(records)
    }

    /// Set the marks of the record with `roll`.
    ///
    /// An absent roll is not an error; the call changes nothing and returns 0.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if the statement fails.
    pub fn edit(&mut self, roll: i32, marks: i32) -> Result<usize> {
        let affected = self.store.update_marks(roll, marks)?;
        if affected == 0 {
            debug!(roll, "Edit matched no record");
        } else {
            info!(roll, marks, "Record updated");
        }
        Ok(affected)
    }

    /// Remove the record with `roll`.
    ///
    /// An absent roll is not an error; the call changes nothing and returns 0.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if the statement fails.
    pub fn delete(&mut self, roll: i32) -> Result<usize> {
        let affected = self.store.delete(roll)?;
        if affected == 0 {
            debug!(roll, "Delete matched no record");
        } else {
            info!(roll, "Record deleted");
        }
        Ok(affected)
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
