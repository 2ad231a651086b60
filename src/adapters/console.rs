//! Console Adapter - Interactive Roster Menu
//!
//! Drives a `RecordStore` from line-oriented input. Generic over
//! `BufRead`/`Write` so the same loop serves stdin/stdout and tests.
//!
//! Menu:
//! 1. add employee
//! 2. list employees
//! 3. search by name
//! 4. average salary
//! 5. quit
//!
//! End of input behaves like quit.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::domain::salary::format_salary;
use crate::ports::storage::ContainerStorage;
use crate::usecases::record_store::{AddError, AverageError, Flush, RecordStore};

/// Whether the menu loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Line-oriented menu over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the menu until the user quits or input ends.
    ///
    /// # Errors
    /// Only I/O failures on the console streams; roster errors are shown to
    /// the user and the loop continues.
    pub fn run<S: ContainerStorage>(&mut self, store: &mut RecordStore<S>) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                writeln!(self.output, "\nExiting.")?;
                return Ok(());
            };
            debug!(choice = %choice, "Menu option selected");

            let step = match choice.trim() {
                "1" => self.add_employee(store)?,
                "2" => self.list_employees(store)?,
                "3" => self.search_employee(store)?,
                "4" => self.average_salary(store)?,
                "5" => {
                    writeln!(self.output, "Exiting.\n")?;
                    Step::Quit
                }
                _ => {
                    writeln!(self.output, "Invalid option. Try again.\n")?;
                    Step::Continue
                }
            };

            if step == Step::Quit {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Employee Roster ===")?;
        writeln!(self.output, "1 - Add employee")?;
        writeln!(self.output, "2 - List employees")?;
        writeln!(self.output, "3 - Search employee by name")?;
        writeln!(self.output, "4 - Average salary")?;
        writeln!(self.output, "5 - Quit")
    }

    /// Print `label` and read one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add_employee<S: ContainerStorage>(&mut self, store: &mut RecordStore<S>) -> io::Result<Step> {
        let Some(name) = self.prompt("Employee name: ")? else {
            return Ok(Step::Quit);
        };
        if name.trim().is_empty() {
            writeln!(self.output, "Name must not be empty.\n")?;
            return Ok(Step::Continue);
        }

        let Some(role) = self.prompt("Role: ")? else {
            return Ok(Step::Quit);
        };
        let Some(department) = self.prompt("Department: ")? else {
            return Ok(Step::Quit);
        };
        let Some(salary) = self.prompt("Salary (e.g. 8.200,00 or 2500.50): ")? else {
            return Ok(Step::Quit);
        };

        match store.add(&name, &role, &department, &salary) {
            Ok(flush) => {
                if let Flush::Failed(e) = flush {
                    writeln!(self.output, "Warning: could not save data: {e}")?;
                }
                writeln!(
                    self.output,
                    "\nEmployee {} added to department {}.\n",
                    name.trim(),
                    department.trim()
                )?;
            }
            Err(AddError::EmptyName) => writeln!(self.output, "Name must not be empty.\n")?,
            Err(AddError::InvalidSalary(e)) => {
                debug!(error = %e, "Rejected salary input");
                writeln!(
                    self.output,
                    "Error: invalid salary. Use numbers only, e.g. 8.200,00 or 2500.50.\n"
                )?;
            }
        }
        Ok(Step::Continue)
    }

    fn list_employees<S: ContainerStorage>(&mut self, store: &RecordStore<S>) -> io::Result<Step> {
        if store.is_empty() {
            writeln!(self.output, "No employees registered.\n")?;
            return Ok(Step::Continue);
        }

        writeln!(self.output, "\n--- Employees ---")?;
        for (i, employee) in store.records().iter().enumerate() {
            writeln!(self.output, "{}. {employee}", i + 1)?;
        }
        writeln!(self.output)?;
        Ok(Step::Continue)
    }

    fn search_employee<S: ContainerStorage>(&mut self, store: &RecordStore<S>) -> io::Result<Step> {
        let Some(query) = self.prompt("Name to search: ")? else {
            return Ok(Step::Quit);
        };

        let found = store.find(&query);
        if found.is_empty() {
            writeln!(self.output, "Employee not found.\n")?;
        } else {
            writeln!(self.output, "\nEmployee(s) found:")?;
            for employee in found {
                writeln!(self.output, "{employee}")?;
            }
            writeln!(self.output)?;
        }
        Ok(Step::Continue)
    }

    fn average_salary<S: ContainerStorage>(&mut self, store: &RecordStore<S>) -> io::Result<Step> {
        match store.average() {
            Ok(avg) => writeln!(self.output, "\nAverage salary: {}\n", format_salary(&avg))?,
            Err(AverageError::Empty) => {
                writeln!(self.output, "No employees registered for the calculation.\n")?;
            }
            Err(e @ AverageError::Overflow) => writeln!(self.output, "Error: {e}.\n")?,
        }
        Ok(Step::Continue)
    }
}
