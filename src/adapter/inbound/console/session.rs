//! Menu-driven console session.
//!
//! Strictly serial: show the menu, read a choice, run the operation to
//! completion, print the result, repeat. Unusable answers are reported and
//! asked again. End of input ends the session as if "Exit" was chosen.
//! Database errors end the session and are returned to the caller.

use std::ops::ControlFlow;

use tracing::debug;

use super::input::{parse_name, parse_number, InputError};
use super::menu::{self, MenuChoice};
use crate::adapter::inbound::cli::output;
use crate::application::RecordManager;
use crate::domain::Student;
use crate::error::Result;
use crate::port::{Prompt, StudentStore};

pub const RECORDS_TITLE: &str = "--- Student Records ---";
pub const INVALID_CHOICE: &str = "Invalid Choice!!";
pub const ADDED: &str = "Record Added Successfully!";
pub const UPDATED: &str = "Record Updated Successfully!";
pub const DELETED: &str = "Record Deleted Successfully!";

/// Flow result of a single step: `Break` means input ran out.
type Step<T> = Result<ControlFlow<(), T>>;

/// One interactive session over a record manager.
pub struct Session<'a, S, P> {
    records: &'a mut RecordManager<S>,
    prompt: P,
}

impl<'a, S: StudentStore, P: Prompt> Session<'a, S, P> {
    pub fn new(records: &'a mut RecordManager<S>, prompt: P) -> Self {
        Self { records, prompt }
    }

    /// Run until the operator exits or input ends.
    ///
    /// # Errors
    /// Returns the first database or I/O error; the session stops there.
    pub fn run(&mut self) -> Result<()> {
        loop {
            menu::print();
            let ControlFlow::Continue(key) = self.ask_number("Enter your choice")? else {
                break;
            };

            let Some(choice) = MenuChoice::from_key(key) else {
                output::warning(INVALID_CHOICE);
                continue;
            };
            debug!(?choice, "Menu choice");

            if self.dispatch(choice)?.is_break() {
                break;
            }
        }
        debug!("Console session finished");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Step<()> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::View => self.view(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Exit => Ok(ControlFlow::Break(())),
        }
    }

    fn add(&mut self) -> Step<()> {
        let ControlFlow::Continue(roll) = self.ask_number("Enter Roll No")? else {
            return Ok(ControlFlow::Break(()));
        };
        let ControlFlow::Continue(name) = self.ask_name("Enter Name")? else {
            return Ok(ControlFlow::Break(()));
        };
        let ControlFlow::Continue(marks) = self.ask_number("Enter Marks")? else {
            return Ok(ControlFlow::Break(()));
        };

        let student = Student { roll, name, marks };
        self.records.add(&student)?;
        output::success(ADDED);
        Ok(ControlFlow::Continue(()))
    }

    fn view(&mut self) -> Step<()> {
        let records = self.records.view()?;
        output::section(RECORDS_TITLE);
        output::records(&records);
        Ok(ControlFlow::Continue(()))
    }

    fn edit(&mut self) -> Step<()> {
        let ControlFlow::Continue(roll) = self.ask_number("Enter Roll No to Update")? else {
            return Ok(ControlFlow::Break(()));
        };
        let ControlFlow::Continue(marks) = self.ask_number("Enter New Marks")? else {
            return Ok(ControlFlow::Break(()));
        };

        self.records.edit(roll, marks)?;
        output::success(UPDATED);
        Ok(ControlFlow::Continue(()))
    }

    fn delete(&mut self) -> Step<()> {
        let ControlFlow::Continue(roll) = self.ask_number("Enter Roll No to Delete")? else {
            return Ok(ControlFlow::Break(()));
        };

        self.records.delete(roll)?;
        output::success(DELETED);
        Ok(ControlFlow::Continue(()))
    }

    fn ask_number(&mut self, prompt: &str) -> Step<i32> {
        self.ask_until_valid(prompt, |answer| parse_number(&answer))
    }

    fn ask_name(&mut self, prompt: &str) -> Step<String> {
        self.ask_until_valid(prompt, parse_name)
    }

    fn ask_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(String) -> std::result::Result<T, InputError>,
    ) -> Step<T> {
        loop {
            let Some(answer) = self.prompt.ask(prompt)? else {
                return Ok(ControlFlow::Break(()));
            };
            match parse(answer) {
                Ok(value) => return Ok(ControlFlow::Continue(value)),
                Err(e) => output::warning(&e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::inbound::console::prompt::LinePrompt;
    use crate::adapter::outbound::sqlite::SqliteStudentStore;
    use crate::error::Error;
    use std::io::Cursor;

    fn manager() -> RecordManager<SqliteStudentStore> {
        RecordManager::open(SqliteStudentStore::in_memory().unwrap()).unwrap()
    }

    fn run_script(records: &mut RecordManager<SqliteStudentStore>, script: &str) -> Result<()> {
        let prompt = LinePrompt::new(Cursor::new(script.to_string()), Vec::new());
        Session::new(records, prompt).run()
    }

    fn student(roll: i32, name: &str, marks: i32) -> Student {
        Student::try_new(roll, name, marks).unwrap()
    }

    #[test]
    fn add_view_edit_delete_then_exit() {
        let mut records = manager();
        run_script(&mut records, "1\n1\nAlice\n90\n2\n3\n1\n95\n5\n").unwrap();
        assert_eq!(records.view().unwrap(), vec![student(1, "Alice", 95)]);

        run_script(&mut records, "4\n1\n5\n").unwrap();
        assert!(records.view().unwrap().is_empty());
    }

    #[test]
    fn invalid_numbers_are_asked_again() {
        let mut records = manager();
        run_script(&mut records, "one\n1\nx\n2\nBob\nlots\n80\n5\n").unwrap();
        assert_eq!(records.view().unwrap(), vec![student(2, "Bob", 80)]);
    }

    #[test]
    fn long_name_is_asked_again() {
        let mut records = manager();
        let script = format!("1\n3\n{}\nCarol\n70\n5\n", "c".repeat(51));
        run_script(&mut records, &script).unwrap();
        assert_eq!(records.view().unwrap(), vec![student(3, "Carol", 70)]);
    }

    #[test]
    fn out_of_range_choice_keeps_looping() {
        let mut records = manager();
        run_script(&mut records, "9\n0\n1\n4\nDan\n60\n5\n").unwrap();
        assert_eq!(records.view().unwrap(), vec![student(4, "Dan", 60)]);
    }

    #[test]
    fn end_of_input_ends_session_cleanly() {
        let mut records = manager();
        run_script(&mut records, "").unwrap();
        run_script(&mut records, "1\n5\nEve\n").unwrap();
        assert!(records.view().unwrap().is_empty());
    }

    #[test]
    fn edit_and_delete_of_absent_roll_are_silent() {
        let mut records = manager();
        records.add(&student(1, "Alice", 90)).unwrap();

        run_script(&mut records, "3\n8\n10\n4\n8\n5\n").unwrap();
        assert_eq!(records.view().unwrap(), vec![student(1, "Alice", 90)]);
    }

    #[test]
    fn duplicate_roll_ends_session_with_error() {
        let mut records = manager();
        let result = run_script(&mut records, "1\n1\nAlice\n90\n1\n1\nBob\n80\n2\n5\n");

        assert!(matches!(result, Err(Error::DuplicateRoll { roll: 1 })));
        assert_eq!(records.view().unwrap(), vec![student(1, "Alice", 90)]);
    }
}
