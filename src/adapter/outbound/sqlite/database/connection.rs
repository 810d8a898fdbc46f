//! Database connection management using Diesel ORM.
//!
//! Opens the single SQLite connection the application works through and
//! owns the `student` table definition.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use super::model::ColumnInfo;
use crate::error::{Error, Result};

/// Name of the only table this crate manages.
pub const STUDENT_TABLE: &str = "student";

/// Idempotent DDL for the student table.
pub const CREATE_STUDENT_TABLE: &str = "CREATE TABLE IF NOT EXISTS student (
    roll INTEGER PRIMARY KEY,
    name VARCHAR(50),
    marks INTEGER
)";

const TABLE_INFO_QUERY: &str =
    "SELECT name, type AS declared_type, pk FROM pragma_table_info('student')";

/// Open a connection to the given database URL.
///
/// `:memory:` opens a private in-memory database.
///
/// # Errors
/// Returns [`Error::Connection`] if the database cannot be opened.
pub fn establish(database_url: &str) -> Result<SqliteConnection> {
    debug!(database = %database_url, "Opening database connection");
    SqliteConnection::establish(database_url).map_err(|e| Error::Connection(e.to_string()))
}

/// Create the student table if absent, then check the existing shape.
///
/// # Errors
/// Returns [`Error::Database`] if the statement fails and [`Error::Schema`]
/// if a `student` table exists with incompatible columns.
pub fn ensure_student_table(conn: &mut SqliteConnection) -> Result<()> {
    diesel::sql_query(CREATE_STUDENT_TABLE)
        .execute(conn)
        .map_err(|e| Error::Database(e.to_string()))?;

    let columns: Vec<ColumnInfo> = diesel::sql_query(TABLE_INFO_QUERY)
        .load(conn)
        .map_err(|e| Error::Database(e.to_string()))?;

    check_shape(&columns)
}

/// Verify `columns` describe `student(roll INTEGER PRIMARY KEY, name TEXT, marks INTEGER)`.
///
/// Declared types are compared by SQLite affinity, so `INT` and `INTEGER`
/// or `VARCHAR(50)` and `TEXT` are interchangeable.
///
/// # Errors
/// Returns [`Error::Schema`] describing the first mismatch.
pub fn check_shape(columns: &[ColumnInfo]) -> Result<()> {
    let mismatch = |reason: String| Error::Schema {
        table: STUDENT_TABLE,
        reason,
    };

    let mut names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    if names != ["marks", "name", "roll"] {
        return Err(mismatch(format!(
            "expected columns roll, name, marks; found {}",
            names.join(", ")
        )));
    }

    for column in columns {
        let ty = column.declared_type.to_ascii_uppercase();
        match column.name.as_str() {
            "roll" => {
                if !ty.contains("INT") {
                    return Err(mismatch(format!("roll is {ty}, expected INTEGER")));
                }
                if column.pk != 1 {
                    return Err(mismatch("roll is not the primary key".to_string()));
                }
            }
            "marks" => {
                if !ty.contains("INT") {
                    return Err(mismatch(format!("marks is {ty}, expected INTEGER")));
                }
            }
            "name" => {
                if !(ty.contains("CHAR") || ty.contains("TEXT") || ty.contains("CLOB")) {
                    return Err(mismatch(format!("name is {ty}, expected text")));
                }
            }
            _ => {}
        }
        if column.name != "roll" && column.pk != 0 {
            return Err(mismatch(format!("{} is part of the primary key", column.name)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, declared_type: &str, pk: i32) -> ColumnInfo {
        ColumnInfo {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            pk,
        }
    }

    #[test]
    fn establish_memory_db() {
        assert!(establish(":memory:").is_ok());
    }

    #[test]
    fn establish_fails_for_missing_directory() {
        let result = establish("/nonexistent-rollbook-dir/sub/college.db");
        assert!(matches!(result, Err(Error::Connection(_))));
    }

    #[test]
    fn ensure_student_table_is_idempotent() {
        let mut conn = establish(":memory:").unwrap();
        ensure_student_table(&mut conn).unwrap();
        ensure_student_table(&mut conn).unwrap();
    }

    #[test]
    fn ensure_student_table_accepts_mysql_style_types() {
        let mut conn = establish(":memory:").unwrap();
        diesel::sql_query("CREATE TABLE student (roll INT PRIMARY KEY, name VARCHAR(50), marks INT)")
            .execute(&mut conn)
            .unwrap();
        ensure_student_table(&mut conn).unwrap();
    }

    #[test]
    fn ensure_student_table_rejects_incompatible_table() {
        let mut conn = establish(":memory:").unwrap();
        diesel::sql_query("CREATE TABLE student (id TEXT PRIMARY KEY, grade REAL)")
            .execute(&mut conn)
            .unwrap();

        let result = ensure_student_table(&mut conn);
        assert!(matches!(result, Err(Error::Schema { table: "student", .. })));
    }

    #[test]
    fn check_shape_accepts_expected_columns() {
        let columns = vec![
            column("roll", "INTEGER", 1),
            column("name", "VARCHAR(50)", 0),
            column("marks", "INTEGER", 0),
        ];
        assert!(check_shape(&columns).is_ok());
    }

    #[test]
    fn check_shape_rejects_missing_primary_key() {
        let columns = vec![
            column("roll", "INTEGER", 0),
            column("name", "TEXT", 0),
            column("marks", "INTEGER", 0),
        ];
        let err = check_shape(&columns).unwrap_err();
        assert!(err.to_string().contains("primary key"));
    }

    #[test]
    fn check_shape_rejects_text_marks() {
        let columns = vec![
            column("roll", "INTEGER", 1),
            column("name", "TEXT", 0),
            column("marks", "TEXT", 0),
        ];
        let err = check_shape(&columns).unwrap_err();
        assert!(err.to_string().contains("marks is TEXT"));
    }

    #[test]
    fn check_shape_rejects_extra_columns() {
        let columns = vec![
            column("roll", "INTEGER", 1),
            column("name", "TEXT", 0),
            column("marks", "INTEGER", 0),
            column("grade", "TEXT", 0),
        ];
        assert!(matches!(check_shape(&columns), Err(Error::Schema { .. })));
    }
}
