//! Domain layer - Employee records and salary parsing.
//!
//! Pure logic with no I/O (hexagonal architecture inner ring).
//! All amounts are exact `Decimal` values, never binary floats.

pub mod employee;
pub mod salary;

// Re-export core types for convenience
pub use employee::Employee;
pub use salary::{SalaryParseError, format_salary, parse_salary};
