//! Container Format - Persisted Employee List
//!
//! The container is a pretty-printed JSON array of objects with the keys
//! `name`, `role`, `department` and `salary`. Files written by the legacy
//! Portuguese tool (`nome`, `cargo`, `setor`, `salario`) are accepted on
//! read.
//!
//! Salaries cross this boundary through [`SalaryField`], an explicit
//! number-or-text union, so the decode step is visible rather than an
//! implicit runtime coercion.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::storage::{ContainerStorage, StorageError};
use crate::domain::employee::Employee;
use crate::domain::salary::{SalaryParseError, parse_salary};

/// Salary as it appears in the persisted container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryField {
  /// JSON number, e.g. `8200` or `2500.5`.
  Number(serde_json::Number),
  /// Numeric-looking text, e.g. `"2500.50"` or `"8.200,00"`.
  Text(String),
}

impl SalaryField {
  /// Chooses the wire form for an amount.
  ///
  /// Integers that fit in `u64` become JSON integers. Fractional amounts
  /// become JSON numbers only when the number reads back to the same
  /// decimal; anything else is written as text.
  pub fn encode(value: &Decimal) -> Self {
    let value = value.normalize();
    if value.scale() == 0 {
      if let Some(n) = value.to_u64() {
        return Self::Number(n.into());
      }
    }

    let text = value.to_string();
    let number = text
      .parse::<f64>()
      .ok()
      .and_then(serde_json::Number::from_f64)
      .filter(|n| decode_number(n).is_ok_and(|back| back == value));

    match number {
      Some(n) => Self::Number(n),
      None => Self::Text(text),
    }
  }

  /// Decodes the field into an exact amount.
  ///
  /// Text goes through the salary parser, so typed-in conventions such as
  /// `"8.200,00"` are accepted. Numbers are read as JSON numbers, including
  /// exponent forms like `1e-7` or `1e+16`. Negatives are rejected either way.
  pub fn decode(&self) -> Result<Decimal, SalaryParseError> {
    match self {
      Self::Number(n) => decode_number(n),
      Self::Text(s) => parse_salary(s),
    }
  }
}

/// Reads a JSON number exactly, accepting plain and exponent notation.
fn decode_number(n: &serde_json::Number) -> Result<Decimal, SalaryParseError> {
  let text = n.to_string();
  let value = Decimal::from_str_exact(&text)
    .or_else(|_| Decimal::from_scientific(&text))
    .map_err(|_| SalaryParseError::Malformed {
      input: text.clone(),
      normalized: text.clone(),
    })?;

  if value < Decimal::ZERO {
    return Err(SalaryParseError::Negative { value });
  }
  Ok(value)
}

/// One employee as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PersistedEmployee {
  #[serde(alias = "nome")]
  name: String,
  #[serde(alias = "cargo")]
  role: String,
  #[serde(alias = "setor")]
  department: String,
  #[serde(alias = "salario")]
  salary: SalaryField,
}

/// Why a present container could not be used.
#[derive(Debug, Error)]
pub enum CorruptReason {
  /// The collaborator failed to read existing bytes.
  #[error(transparent)]
  Unreadable(#[from] StorageError),
  /// Not JSON, or not a list of employee objects.
  #[error("container is not a valid employee list: {0}")]
  Malformed(#[from] serde_json::Error),
  /// An entry's salary could not be decoded.
  #[error("employee #{index} has an invalid salary: {source}")]
  Salary {
    index: usize,
    #[source]
    source: SalaryParseError,
  },
}

/// Result of reading the persisted container.
///
/// The caller decides whether `Corrupt` aborts or degrades to an empty
/// roster.
#[derive(Debug)]
pub enum LoadOutcome {
  /// Nothing has been persisted yet.
  Absent,
  /// Something is persisted but unusable.
  Corrupt(CorruptReason),
  /// The decoded records, in persisted order.
  Loaded(Vec<Employee>),
}

/// Serialize the full roster as pretty-printed UTF-8 JSON.
pub fn encode_container(records: &[Employee]) -> Result<Vec<u8>, serde_json::Error> {
  let persisted: Vec<PersistedEmployee> = records
    .iter()
    .map(|e| PersistedEmployee {
      name: e.name.clone(),
      role: e.role.clone(),
      department: e.department.clone(),
      salary: SalaryField::encode(&e.salary),
    })
    .collect();
  serde_json::to_vec_pretty(&persisted)
}

/// Decode a container into employees, keeping persisted order.
///
/// # Errors
/// Fails on invalid JSON, unexpected shape, or any undecodable salary.
pub fn decode_container(bytes: &[u8]) -> Result<Vec<Employee>, CorruptReason> {
  let persisted: Vec<PersistedEmployee> = serde_json::from_slice(bytes)?;
  persisted
    .into_iter()
    .enumerate()
    .map(|(index, p)| {
      let salary = p
        .salary
        .decode()
        .map_err(|source| CorruptReason::Salary { index, source })?;
      Ok(Employee {
        name: p.name,
        role: p.role,
        department: p.department,
        salary,
      })
    })
    .collect()
}

/// Read and decode the container held by `storage`.
///
/// Never fails: every problem is reported through the returned outcome.
pub fn load<S: ContainerStorage + ?Sized>(storage: &S) -> LoadOutcome {
  let bytes = match storage.read_container() {
    Ok(Some(bytes)) => bytes,
    Ok(None) => {
      debug!("No persisted container found");
      return LoadOutcome::Absent;
    }
    Err(e) => {
      warn!(error = %e, "Persisted container is unreadable");
      return LoadOutcome::Corrupt(e.into());
    }
  };

  match decode_container(&bytes) {
    Ok(records) => {
      debug!(count = records.len(), "Decoded persisted container");
      LoadOutcome::Loaded(records)
    }
    Err(reason) => {
      warn!(error = %reason, "Persisted container is corrupt");
      LoadOutcome::Corrupt(reason)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn ana() -> Employee {
    Employee::new("Ana", "Dev", "TI", dec!(8200.00))
  }

  #[test]
  fn test_encode_integer_salary_as_json_integer() {
    assert_eq!(SalaryField::encode(&dec!(8200.00)), SalaryField::Number(8200u64.into()));
  }

  #[test]
  fn test_encode_fraction_as_json_number() {
    let field = SalaryField::encode(&dec!(2500.50));
    assert!(matches!(field, SalaryField::Number(_)));
    assert_eq!(field.decode(), Ok(dec!(2500.5)));
  }

  #[test]
  fn test_encode_falls_back_to_text_when_lossy() {
    let precise = dec!(12345678901234567.89);
    let field = SalaryField::encode(&precise);
    assert_eq!(field, SalaryField::Text("12345678901234567.89".to_string()));
    assert_eq!(field.decode(), Ok(precise));
  }

  #[test]
  fn test_tiny_fraction_survives_round_trip() {
    let tiny = dec!(0.0000001);
    let field = SalaryField::encode(&tiny);
    assert_eq!(field.decode(), Ok(tiny));

    let records = vec![ana(), Employee::new("Leo", "QA", "TI", tiny)];
    let bytes = encode_container(&records).unwrap();
    assert_eq!(decode_container(&bytes).unwrap(), records);
  }

  #[test]
  fn test_decode_exponent_numbers() {
    let bytes = br#"[
      {"nome": "Ana", "cargo": "Dev", "setor": "TI", "salario": 1e+16},
      {"nome": "Leo", "cargo": "QA", "setor": "TI", "salario": 1e-05}
    ]"#;
    let records = decode_container(bytes).unwrap();
    assert_eq!(records[0].salary, dec!(10000000000000000));
    assert_eq!(records[1].salary, dec!(0.00001));
  }

  #[test]
  fn test_decode_text_salary() {
    assert_eq!(SalaryField::Text("2500.50".into()).decode(), Ok(dec!(2500.50)));
    assert_eq!(SalaryField::Text("8.200,00".into()).decode(), Ok(dec!(8200)));
  }

  #[test]
  fn test_container_is_pretty_json_with_english_keys() {
    let bytes = encode_container(&[ana()]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains('\n'));
    assert!(text.contains("\"name\": \"Ana\""));
    assert!(text.contains("\"department\": \"TI\""));
    assert!(text.contains("\"salary\": 8200"));
  }

  #[test]
  fn test_round_trip() {
    let records = vec![
      ana(),
      Employee::new("Leo", "QA", "TI", dec!(3500.25)),
      Employee::new("Ana", "PM", "Ops", dec!(0.01)),
    ];
    let bytes = encode_container(&records).unwrap();
    assert_eq!(decode_container(&bytes).unwrap(), records);
  }

  #[test]
  fn test_decode_legacy_portuguese_keys() {
    let legacy = r#"[{"nome": "Ana", "cargo": "Dev", "setor": "TI", "salario": "8200.0"}]"#;
    let records = decode_container(legacy.as_bytes()).unwrap();
    assert_eq!(records, vec![ana()]);
  }

  #[test]
  fn test_decode_rejects_wrong_shape() {
    assert!(matches!(
      decode_container(br#"{"name": "Ana"}"#),
      Err(CorruptReason::Malformed(_))
    ));
    assert!(matches!(
      decode_container(br#"[{"name": "Ana", "role": "Dev", "department": "TI"}]"#),
      Err(CorruptReason::Malformed(_))
    ));
    assert!(matches!(decode_container(b"not json"), Err(CorruptReason::Malformed(_))));
  }

  #[test]
  fn test_decode_reports_bad_salary_index() {
    let bytes = br#"[
      {"name": "Ana", "role": "Dev", "department": "TI", "salary": 10},
      {"name": "Leo", "role": "QA", "department": "TI", "salary": "lots"}
    ]"#;
    assert!(matches!(
      decode_container(bytes),
      Err(CorruptReason::Salary { index: 1, .. })
    ));
  }

  #[test]
  fn test_decode_rejects_negative_salary() {
    let bytes = br#"[{"name": "Ana", "role": "Dev", "department": "TI", "salary": -5}]"#;
    assert!(matches!(
      decode_container(bytes),
      Err(CorruptReason::Salary { index: 0, source: SalaryParseError::Negative { .. } })
    ));
  }

  #[test]
  fn test_decode_empty_list() {
    assert!(decode_container(b"[]").unwrap().is_empty());
  }
}
