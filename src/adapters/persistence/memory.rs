//! In-memory container storage.

use std::cell::RefCell;

use crate::ports::storage::{ContainerStorage, StorageError};

/// Keeps the container in a process-local buffer.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: RefCell<Option<Vec<u8>>>,
    writes: RefCell<usize>,
}

impl MemoryStorage {
    /// Empty storage: reads report "not found".
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `bytes`.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: RefCell::new(Some(bytes.into())),
            writes: RefCell::new(0),
        }
    }

    /// Copy of the current container, if any.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl ContainerStorage for MemoryStorage {
    fn read_container(&self) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.contents())
    }

    fn write_container(&self, bytes: &[u8]) -> Result<(), StorageError> {
        *self.contents.borrow_mut() = Some(bytes.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
