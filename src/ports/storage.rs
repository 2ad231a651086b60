//! Storage Port - Byte-level Container Persistence
//!
//! The record store never touches files directly. It hands whole
//! serialized containers to an injected `ContainerStorage`, which is
//! responsible for reading them back and for overwriting them without
//! exposing partial writes.

use std::io;

use thiserror::Error;

/// Failure reported by a storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
  /// The container exists but could not be read.
  #[error("failed to read container at {location}: {source}")]
  Read {
    location: String,
    #[source]
    source: io::Error,
  },
  /// The container could not be written or replaced.
  #[error("failed to write container at {location}: {source}")]
  Write {
    location: String,
    #[source]
    source: io::Error,
  },
  /// The records could not be serialized.
  #[error("failed to encode records: {0}")]
  Encode(#[from] serde_json::Error),
}

/// Trait for whole-container persistence providers.
///
/// `read_container` returns `Ok(None)` when nothing has been persisted
/// yet. `write_container` replaces the full container; readers must see
/// either the old or the new bytes, never a mix.
pub trait ContainerStorage {
  /// Read the full persisted container, if any.
  fn read_container(&self) -> Result<Option<Vec<u8>>, StorageError>;

  /// Overwrite the persisted container with `bytes`.
  fn write_container(&self, bytes: &[u8]) -> Result<(), StorageError>;
}
