//! Salary text parsing.
//!
//! Converts human-entered salary text into an exact `Decimal` without an
//! explicit locale tag. Two separator conventions are recognised:
//! - `8.200,00`: `.` groups thousands, `,` separates the fraction
//! - `2500.50`: `.` separates the fraction
//!
//! A `R$` currency marker and any whitespace are ignored.
//!
//! Limitation: text with several `.` and no `,` (`1.234.567`) is rejected
//! as malformed, and `1,234.56` is read as `1.23456`. No further
//! disambiguation is attempted.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Currency marker stripped before numeric interpretation.
const CURRENCY_MARKER: &str = "R$";

/// Why a salary text could not be turned into an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalaryParseError {
    /// Nothing numeric was left after stripping the marker and whitespace.
    #[error("salary is empty")]
    Empty,
    /// Letters, stray signs, or more than one decimal point after
    /// separator normalization.
    #[error("salary {input:?} is not a valid amount (read as {normalized:?})")]
    Malformed { input: String, normalized: String },
    /// A well-formed amount with a leading minus sign.
    #[error("salary must not be negative, got {value}")]
    Negative { value: Decimal },
    /// More digits than a `Decimal` can represent without rounding.
    #[error("salary {normalized:?} is out of range")]
    OutOfRange { normalized: String },
}

/// Applies the separator rules and returns the text that will be read as
/// a plain `digits[.digits]` number.
///
/// Order matters: every `.` is dropped before the `,` conversion when both
/// separators are present, so `1.234.567,89` becomes `1234567.89`.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .replace(CURRENCY_MARKER, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let has_dot = stripped.contains('.');
    let has_comma = stripped.contains(',');

    if has_dot && has_comma {
        stripped.replace('.', "").replace(',', ".")
    } else if has_comma {
        stripped.replace(',', ".")
    } else {
        stripped
    }
}

/// Parses salary text such as `R$ 8.200,00` or `2500.50` into an exact
/// amount.
///
/// # Errors
/// Returns a [`SalaryParseError`] when the text is empty, not a plain
/// decimal after normalization, negative, or too large for `Decimal`.
pub fn parse_salary(raw: &str) -> Result<Decimal, SalaryParseError> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(SalaryParseError::Empty);
    }

    let (negative, magnitude) = match normalized.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, normalized.as_str()),
    };

    if !is_plain_decimal(magnitude) {
        return Err(SalaryParseError::Malformed {
            input: raw.to_string(),
            normalized,
        });
    }

    // `.50` and `2500.` are accepted; Decimal wants digits on both sides.
    let canonical = match magnitude.strip_suffix('.') {
        Some(int_part) => int_part.to_string(),
        None if magnitude.starts_with('.') => format!("0{magnitude}"),
        None => magnitude.to_string(),
    };

    let value = Decimal::from_str_exact(&canonical).map_err(|_| {
        SalaryParseError::OutOfRange {
            normalized: normalized.clone(),
        }
    })?;

    if negative && !value.is_zero() {
        return Err(SalaryParseError::Negative { value: -value });
    }

    Ok(value)
}

/// Renders an amount for display, e.g. `R$ 8200.00`.
pub fn format_salary(value: &Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("R$ {rounded:.2}")
}

/// ASCII digits with at most one `.` and at least one digit.
fn is_plain_decimal(s: &str) -> bool {
    let mut digits = 0usize;
    let mut points = 0usize;
    for c in s.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}
