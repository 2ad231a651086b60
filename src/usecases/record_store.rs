//! Record Store - Employee Roster Lifecycle
//!
//! Owns the in-memory roster and its persistence:
//! - Opening from the injected storage (absent or corrupt data handled
//!   according to `CorruptPolicy`)
//! - Validating and appending new employees
//! - Write-through flush after every successful add
//! - Name search and exact decimal salary average

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::domain::employee::Employee;
use crate::domain::salary::{SalaryParseError, parse_salary};
use crate::ports::container::{self, CorruptReason, LoadOutcome};
use crate::ports::storage::{ContainerStorage, StorageError};

/// What to do when the persisted roster exists but cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
  /// Start with an empty roster and log a warning.
  #[default]
  Degrade,
  /// Refuse to open the store.
  Abort,
}

/// Opening the store failed.
#[derive(Debug, Error)]
pub enum OpenError {
  /// The roster is corrupt and the policy is `Abort`.
  #[error("persisted roster is corrupt: {0}")]
  Corrupt(#[source] CorruptReason),
}

/// An add request was rejected; the roster is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
  /// Name was empty or whitespace only.
  #[error("employee name must not be empty")]
  EmptyName,
  /// Salary text could not be parsed.
  #[error("invalid salary: {0}")]
  InvalidSalary(#[from] SalaryParseError),
}

/// The average could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AverageError {
  /// No employees registered.
  #[error("no employees registered")]
  Empty,
  /// The exact salary total does not fit in a `Decimal`.
  #[error("salary total exceeds the supported range")]
  Overflow,
}

/// Outcome of the write-through flush after a successful add.
///
/// The new employee is kept in memory in both cases.
#[derive(Debug)]
#[must_use]
pub enum Flush {
  /// The container was written.
  Persisted,
  /// The write failed; it is not retried.
  Failed(StorageError),
}

impl Flush {
  /// Whether the roster reached storage.
  pub const fn is_persisted(&self) -> bool {
    matches!(self, Self::Persisted)
  }
}

/// Employee roster backed by an injected container storage.
pub struct RecordStore<S: ContainerStorage> {
  /// Persistence collaborator.
  storage: S,
  /// Employees in insertion order.
  records: Vec<Employee>,
}

impl<S: ContainerStorage> RecordStore<S> {
  /// Create an empty roster without reading storage.
  pub const fn new(storage: S) -> Self {
    Self {
      storage,
      records: Vec::new(),
    }
  }

  /// Open the roster persisted in `storage`.
  ///
  /// Absent data yields an empty roster. Corrupt data yields an empty
  /// roster under `CorruptPolicy::Degrade`.
  ///
  /// # Errors
  /// Returns `OpenError::Corrupt` only under `CorruptPolicy::Abort`.
  #[instrument(skip(storage))]
  pub fn open(storage: S, policy: CorruptPolicy) -> Result<Self, OpenError> {
    let records = match container::load(&storage) {
      LoadOutcome::Loaded(records) => {
        info!(count = records.len(), "Roster loaded");
        records
      }
      LoadOutcome::Absent => {
        info!("No roster found, starting empty");
        Vec::new()
      }
      LoadOutcome::Corrupt(reason) => match policy {
        CorruptPolicy::Degrade => {
          warn!(error = %reason, "Roster unusable, starting empty");
          Vec::new()
        }
        CorruptPolicy::Abort => return Err(OpenError::Corrupt(reason)),
      },
    };

    Ok(Self { storage, records })
  }

  /// Re-read the persisted container without touching the in-memory roster.
  pub fn load(&self) -> LoadOutcome {
    container::load(&self.storage)
  }

  /// Serialize the full roster and overwrite the persisted container.
  ///
  /// # Errors
  /// Returns the storage failure; the in-memory roster is unaffected.
  pub fn save(&self) -> Result<(), StorageError> {
    let bytes = container::encode_container(&self.records)?;
    self.storage.write_container(&bytes)
  }

  /// Validate and append an employee, then flush to storage.
  ///
  /// # Errors
  /// `AddError::EmptyName` or `AddError::InvalidSalary`; in both cases the
  /// roster is unchanged and nothing is written.
  #[instrument(skip_all, fields(name = %name.trim()))]
  pub fn add(
    &mut self,
    name: &str,
    role: &str,
    department: &str,
    salary_text: &str,
  ) -> Result<Flush, AddError> {
    if name.trim().is_empty() {
      return Err(AddError::EmptyName);
    }
    let salary = parse_salary(salary_text)?;

    self.records.push(Employee::new(name, role, department, salary));
    info!(total = self.records.len(), %salary, "Employee added");

    match self.save() {
      Ok(()) => Ok(Flush::Persisted),
      Err(e) => {
        warn!(error = %e, "Roster not persisted, keeping in-memory state");
        Ok(Flush::Failed(e))
      }
    }
  }

  /// All employees in insertion order.
  pub fn records(&self) -> &[Employee] {
    &self.records
  }

  /// Number of employees.
  pub fn len(&self) -> usize {
    self.records.len()
  }

  /// Whether the roster is empty.
  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Employees whose name matches `name`, ignoring case and padding.
  pub fn find(&self, name: &str) -> Vec<&Employee> {
    find_by_name(&self.records, name)
  }

  /// Exact mean salary of the roster.
  ///
  /// # Errors
  /// `AverageError::Empty` when no employee is registered.
  pub fn average(&self) -> Result<Decimal, AverageError> {
    average_salary(&self.records)
  }

  /// Access the storage collaborator.
  pub const fn storage(&self) -> &S {
    &self.storage
  }
}

/// Case-insensitive, trimmed exact match on the employee name.
pub fn find_by_name<'a>(records: &'a [Employee], name: &str) -> Vec<&'a Employee> {
  records.iter().filter(|e| e.name_matches(name)).collect()
}

/// Arithmetic mean of all salaries using exact decimal summation.
///
/// # Errors
/// `AverageError::Empty` for an empty slice, `AverageError::Overflow` when
/// the total leaves the `Decimal` range.
pub fn average_salary(records: &[Employee]) -> Result<Decimal, AverageError> {
  if records.is_empty() {
    return Err(AverageError::Empty);
  }

  let total = records
    .iter()
    .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.salary))
    .ok_or(AverageError::Overflow)?;

  total
    .checked_div(Decimal::from(records.len()))
    .ok_or(AverageError::Overflow)
}
