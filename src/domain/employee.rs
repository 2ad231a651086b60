//! Employee record.
//!
//! A value object: no identity beyond its position in the roster, and
//! duplicate names are allowed.

use std::fmt;

use rust_decimal::Decimal;

use super::salary::format_salary;

/// One employee entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Trimmed, non-empty when created through the store.
    pub name: String,
    pub role: String,
    pub department: String,
    /// Exact, non-negative amount.
    pub salary: Decimal,
}

impl Employee {
    /// Builds a record, trimming the text fields.
    pub fn new(name: &str, role: &str, department: &str, salary: Decimal) -> Self {
        Self {
            name: name.trim().to_string(),
            role: role.trim().to_string(),
            department: department.trim().to_string(),
            salary,
        }
    }

    /// Case-insensitive exact match on the trimmed name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.trim().to_lowercase() == query.trim().to_lowercase()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Role: {} | Department: {} | Salary: {}",
            self.name,
            self.role,
            self.department,
            format_salary(&self.salary)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_trims_fields() {
        let e = Employee::new("  Ana ", " Dev", "TI  ", dec!(8200));
        assert_eq!(e.name, "Ana");
        assert_eq!(e.role, "Dev");
        assert_eq!(e.department, "TI");
    }

    #[test]
    fn test_name_matches_ignores_case_and_padding() {
        let e = Employee {
            name: " Ana ".to_string(),
            role: "Dev".to_string(),
            department: "TI".to_string(),
            salary: dec!(100),
        };
        assert!(e.name_matches("ana"));
        assert!(e.name_matches("  ANA"));
        assert!(!e.name_matches("an"));
        assert!(!e.name_matches("Ana Maria"));
    }

    #[test]
    fn test_display() {
        let e = Employee::new("Leo", "QA", "TI", dec!(3500));
        assert_eq!(
            e.to_string(),
            "Name: Leo | Role: QA | Department: TI | Salary: R$ 3500.00"
        );
    }
}
