//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `RecordStore`: roster lifecycle, add/list/find/average

pub mod record_store;

pub use record_store::{AddError, AverageError, CorruptPolicy, Flush, OpenError, RecordStore};
