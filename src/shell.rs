use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::StoreError;
use crate::record::StudentRecord;
use crate::schema::{FieldName, FIELD_ORDER};
use crate::store::{Confirmation, RecordStore};

const MENU: &str = "\
----------------------------------------
        STUDENT MANAGEMENT SYSTEM
----------------------------------------
[C] Create a new student
[R] Read student details
[S] Search student by ID or name
[T] Sort students by attribute
[U] Update student information
[D] Delete a student record
[E] Exit the program
";

/// The interactive command loop. Generic over its input and output streams
/// so sessions can be scripted in tests; the binary hands it locked stdin
/// and stdout. One command per turn; every store error is reported and the
/// loop continues.
pub struct Shell<'a, R, W> {
    store: &'a RecordStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match choice.trim().to_lowercase().as_str() {
                "c" => self.create()?,
                "r" => self.read()?,
                "s" => self.search()?,
                "t" => self.sort()?,
                "u" => self.update()?,
                "d" => self.delete()?,
                "e" => break,
                other => {
                    debug!("unrecognized command {other:?}");
                    writeln!(self.output, "Invalid command.")?;
                }
            }
        }

        Ok(())
    }

    /// Writes a prompt and reads one line. `None` means end of input, which
    /// aborts the current operation and ends the session.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn create(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter student ID: ")? else {
            return Ok(());
        };
        let Some(first_name) = self.prompt("Enter first name: ")? else {
            return Ok(());
        };
        let Some(last_name) = self.prompt("Enter last name: ")? else {
            return Ok(());
        };
        let Some(grade) = self.prompt("Enter grade: ")? else {
            return Ok(());
        };
        let Some(class) = self.prompt("Enter class: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Enter email: ")? else {
            return Ok(());
        };

        let record = StudentRecord::new(id, first_name, last_name, grade, class, email);
        match self.store.create(record) {
            Ok(()) => writeln!(self.output, "Student added successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn read(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter student ID to read: ")? else {
            return Ok(());
        };

        match self.store.read(&id) {
            Ok(record) => self.print_record(&record)?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let Some(answer) = self.prompt("Search by ID or Name?: ")? else {
            return Ok(());
        };
        let key = if answer.trim().eq_ignore_ascii_case("id") {
            FieldName::Id
        } else {
            FieldName::LastName
        };

        let Some(term) = self.prompt("Enter search term: ")? else {
            return Ok(());
        };

        match self.store.search(key, &term) {
            Ok(record) => self.print_record(&record)?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn sort(&mut self) -> Result<()> {
        let Some(attribute) =
            self.prompt("Specify which attribute to sort on (Last Name, Class, ID): ")?
        else {
            return Ok(());
        };

        match self.store.sort_and_persist(&attribute) {
            Ok(()) => writeln!(self.output, "Students sorted successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter student ID to update: ")? else {
            return Ok(());
        };
        let record = match self.store.read(&id) {
            Ok(record) => record,
            Err(err) => return self.report(&err),
        };

        let updatable: Vec<&str> = FIELD_ORDER
            .iter()
            .filter(|f| f.is_mutable())
            .map(|f| f.display_name())
            .collect();
        writeln!(
            self.output,
            "Available fields to update: {}",
            updatable.join(", ")
        )?;

        let Some(field_name) = self.prompt("Enter the name of the field to update: ")? else {
            return Ok(());
        };
        let Some(field) = FieldName::parse(&field_name).filter(FieldName::is_mutable) else {
            return self.report(&StoreError::InvalidField(field_name.trim().to_string()));
        };

        let Some(value) = self.prompt(&format!(
            "The {field} field is currently {}, what do you want to update it to? ",
            record.field(field)
        ))?
        else {
            return Ok(());
        };

        match self.store.update(&id, field.display_name(), value) {
            Ok(()) => writeln!(self.output, "Student updated successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter student ID to delete: ")? else {
            return Ok(());
        };
        let request = match self.store.request_delete(&id) {
            Ok(request) => request,
            Err(err) => return self.report(&err),
        };

        let Some(answer) = self.prompt(&format!(
            "Are you sure you want to delete {} {} (ID: {})? (Y/N): ",
            request.record.first_name, request.record.last_name, request.record.id
        ))?
        else {
            return Ok(());
        };

        match self
            .store
            .commit_delete(&id, Confirmation::from_answer(&answer))
        {
            Ok(()) => writeln!(self.output, "Student deleted successfully.")?,
            Err(StoreError::Cancelled) => writeln!(self.output, "Deletion cancelled.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn print_record(&mut self, record: &StudentRecord) -> Result<()> {
        for field in FIELD_ORDER {
            writeln!(self.output, "{}: {}", field, record.field(field))?;
        }
        Ok(())
    }

    fn report(&mut self, err: &StoreError) -> Result<()> {
        writeln!(self.output, "Error: {err}")?;
        Ok(())
    }
}
