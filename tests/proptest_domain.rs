//! Property-Based Tests — Salary Parsing and Container Invariants
//!
//! Uses `proptest` to check the separator rules and the persisted
//! round trip across random amounts.

use proptest::prelude::*;
use rust_decimal::Decimal;

use staff_roster::domain::Employee;
use staff_roster::domain::salary::parse_salary;
use staff_roster::ports::container::{decode_container, encode_container};
use staff_roster::usecases::record_store::average_salary;

/// Brazilian rendering with `.` thousands groups and `,` decimals.
fn brazilian(units: u64, cents: u64) -> String {
    let digits = units.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{grouped},{cents:02}")
}

fn amount(units: u64, cents: u64) -> Decimal {
    Decimal::new(i64::try_from(units * 100 + cents).unwrap(), 2)
}

// ── Salary Parser Properties ────────────────────────────────

proptest! {
    /// Grouped Brazilian text parses to the exact amount.
    #[test]
    fn brazilian_grouping_parses_exactly(units in 0u64..10_000_000_000, cents in 0u64..100) {
        let text = brazilian(units, cents);
        prop_assert_eq!(parse_salary(&text), Ok(amount(units, cents)));
    }

    /// Dot-decimal text parses to the exact amount.
    #[test]
    fn dot_decimal_parses_exactly(units in 0u64..10_000_000_000, cents in 0u64..100) {
        let text = format!("{units}.{cents:02}");
        prop_assert_eq!(parse_salary(&text), Ok(amount(units, cents)));
    }

    /// The currency marker and padding never change the value.
    #[test]
    fn marker_and_padding_ignored(units in 0u64..1_000_000, cents in 0u64..100, pad in " {0,3}") {
        let bare = format!("{units},{cents:02}");
        let decorated = format!("{pad}R${pad}{bare}{pad}");
        prop_assert_eq!(parse_salary(&decorated), parse_salary(&bare));
    }

    /// Letters anywhere make the text invalid.
    #[test]
    fn letters_rejected(prefix in "[0-9]{0,4}", letter in "[a-zA-Z]", suffix in "[0-9]{0,4}") {
        let text = format!("{prefix}{letter}{suffix}");
        prop_assert!(parse_salary(&text).is_err());
    }

    /// Parsed amounts are never negative.
    #[test]
    fn parsed_amounts_non_negative(text in "[-0-9.,R$ ]{0,12}") {
        if let Ok(value) = parse_salary(&text) {
            prop_assert!(value >= Decimal::ZERO);
        }
    }
}

// ── Container Properties ────────────────────────────────────

proptest! {
    /// Saving then loading yields the same roster at decimal precision, for
    /// any scale a `Decimal` can carry.
    #[test]
    fn container_round_trip(
        rows in proptest::collection::vec(
            ("[A-Za-z ]{1,12}", "[A-Za-z]{0,8}", "[A-Za-z]{0,8}", 0i64..=i64::MAX, 0u32..=28),
            0..8,
        )
    ) {
        let records: Vec<Employee> = rows
            .iter()
            .map(|(name, role, dept, mantissa, scale)| Employee {
                name: name.clone(),
                role: role.clone(),
                department: dept.clone(),
                salary: Decimal::new(*mantissa, *scale),
            })
            .collect();
        let bytes = encode_container(&records).unwrap();
        prop_assert_eq!(decode_container(&bytes).unwrap(), records);
    }

    /// The average lies between the smallest and largest salary.
    #[test]
    fn average_is_bounded(salaries in proptest::collection::vec(0u64..100_000_000, 1..20)) {
        let records: Vec<Employee> = salaries
            .iter()
            .map(|s| Employee::new("x", "y", "z", Decimal::new(i64::try_from(*s).unwrap(), 2)))
            .collect();
        let avg = average_salary(&records).unwrap();
        let min = records.iter().map(|e| e.salary).min().unwrap();
        let max = records.iter().map(|e| e.salary).max().unwrap();
        prop_assert!(avg >= min && avg <= max, "avg {} outside [{}, {}]", avg, min, max);
    }
}
