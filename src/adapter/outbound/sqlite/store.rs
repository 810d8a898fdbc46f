//! SQLite store implementation using Diesel.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;
use tracing::{debug, warn};

use super::database::connection::{ensure_student_table, establish};
use super::database::model::{NewStudentRow, StudentRow};
use super::database::schema::student;
use crate::domain::Student;
use crate::error::{Error, Result};
use crate::port::StudentStore;

/// SQLite-backed student store.
///
/// Owns a single connection for its whole lifetime; the connection is
/// closed when the store is dropped. SQLite runs in autocommit mode, so each
/// statement is committed as soon as it returns.
pub struct SqliteStudentStore {
    conn: SqliteConnection,
    location: String,
}

impl SqliteStudentStore {
    /// Open a store on the given database URL.
    ///
    /// # Errors
    /// Returns [`Error::Connection`] if the database cannot be opened.
    pub fn open(database_url: &str) -> Result<Self> {
        let conn = establish(database_url)?;
        Ok(Self {
            conn,
            location: database_url.to_string(),
        })
    }

    /// Open a private in-memory store.
    ///
    /// # Errors
    /// Returns [`Error::Connection`] if SQLite cannot allocate the database.
    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    /// Where this store's data lives.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}

impl Drop for SqliteStudentStore {
    fn drop(&mut self) {
        debug!(database = %self.location, "Closing database connection");
    }
}

impl StudentStore for SqliteStudentStore {
    fn initialize(&mut self) -> Result<()> {
        ensure_student_table(&mut self.conn)
    }

    fn insert(&mut self, record: &Student) -> Result<()> {
        diesel::insert_into(student::table)
            .values(NewStudentRow::from(record))
            .execute(&mut self.conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    Error::DuplicateRoll { roll: record.roll }
                }
                other => Error::Database(other.to_string()),
            })?;

        Ok(())
    }

    fn all(&mut self) -> Result<Vec<Student>> {
        // `roll INT PRIMARY KEY` tables from other clients can hold NULL rolls.
        let orphans: i64 = student::table
            .filter(student::roll.is_null())
            .count()
            .get_result(&mut self.conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        if orphans > 0 {
            warn!(count = orphans, "Skipping rows without a roll number");
        }

        let rows: Vec<StudentRow> = student::table
            .filter(student::roll.is_not_null())
            .select(StudentRow::as_select())
            .load(&mut self.conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    fn update_marks(&mut self, roll: i32, marks: i32) -> Result<usize> {
        diesel::update(student::table.find(roll))
            .set(student::marks.eq(marks))
            .execute(&mut self.conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    fn delete(&mut self, roll: i32) -> Result<usize> {
        diesel::delete(student::table.find(roll))
            .execute(&mut self.conn)
            .map_err(|e| Error::Database(e.to_string()))
    }
}
