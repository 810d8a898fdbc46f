//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::student;
use crate::domain::Student;

/// Database row for a student (queryable).
///
/// `name` and `marks` are nullable in the DDL, so rows written by other
/// clients may carry NULLs.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = student)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentRow {
    pub roll: i32,
    pub name: Option<String>,
    pub marks: Option<i32>,
}

/// Database row for a student (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = student)]
pub struct NewStudentRow<'a> {
    pub roll: i32,
    pub name: &'a str,
    pub marks: i32,
}

impl<'a> From<&'a Student> for NewStudentRow<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            roll: student.roll,
            name: &student.name,
            marks: student.marks,
        }
    }
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            roll: row.roll,
            name: row.name.unwrap_or_default(),
            marks: row.marks.unwrap_or_default(),
        }
    }
}

/// One entry of `pragma_table_info('student')`.
#[derive(QueryableByName, Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub declared_type: String,
    #[diesel(sql_type = diesel::sql_types::Integer)]
    pub pk: i32,
}
