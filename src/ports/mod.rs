//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces the use-case layer requires from the outside
//! world. Adapters implement these traits.
//!
//! Port categories:
//! - `ContainerStorage`: whole-container byte persistence
//! - `container`: the persisted JSON format and its decode step

pub mod container;
pub mod storage;

pub use container::{CorruptReason, LoadOutcome, SalaryField};
pub use storage::{ContainerStorage, StorageError};
