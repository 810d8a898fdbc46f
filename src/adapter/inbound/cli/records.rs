//! Scripted record commands.
//!
//! Each handler performs one Record Manager operation and reports it with
//! the same messages the interactive menu uses.

use serde_json::json;

use crate::adapter::inbound::cli::command::{AddArgs, DeleteArgs, EditArgs};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::console::session::{ADDED, DELETED, UPDATED};
use crate::adapter::outbound::sqlite::SqliteStudentStore;
use crate::application::RecordManager;
use crate::domain::Student;
use crate::error::Result;
use crate::port::StudentStore;

/// Report the ready table.
pub fn init(records: &RecordManager<SqliteStudentStore>) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "init",
            "database": records.store().location(),
            "table": "student",
        }));
        return Ok(());
    }

    output::success("Student table ready");
    output::field("Database", records.store().location());
    Ok(())
}

/// Add one record.
pub fn add<S: StudentStore>(records: &mut RecordManager<S>, args: AddArgs) -> Result<()> {
    let student = Student::try_new(args.roll, args.name, args.marks)?;
    records.add(&student)?;
    output::success(ADDED);
    Ok(())
}

/// Print every record.
pub fn list<S: StudentStore>(records: &mut RecordManager<S>) -> Result<()> {
    let all = records.view()?;
    output::records(&all);
    Ok(())
}

/// Change the marks of one record. An absent roll is reported the same way.
pub fn edit<S: StudentStore>(records: &mut RecordManager<S>, args: &EditArgs) -> Result<()> {
    records.edit(args.roll, args.marks)?;
    output::success(UPDATED);
    Ok(())
}

/// Delete one record. An absent roll is reported the same way.
pub fn delete<S: StudentStore>(records: &mut RecordManager<S>, args: &DeleteArgs) -> Result<()> {
    records.delete(args.roll)?;
    output::success(DELETED);
    Ok(())
}
