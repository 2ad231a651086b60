//! File Storage - Atomic Single-file Container
//!
//! Writes the container to a temporary sibling file first, then renames it
//! over the real path. The file on disk is always either the previous or
//! the new container, never a partial write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::ports::storage::{ContainerStorage, StorageError};

/// Container stored in one file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Path to the container file.
    path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
}

impl FileStorage {
    /// Create a storage handle for `path`. Nothing is touched on disk until
    /// the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        Self {
            path,
            tmp_path: PathBuf::from(tmp),
        }
    }

    /// Path of the container file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl ContainerStorage for FileStorage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_container(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                debug!(bytes = bytes.len(), "Container read");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                location: self.location(),
                source,
            }),
        }
    }

    #[instrument(skip(self, bytes), fields(path = %self.path.display(), len = bytes.len()))]
    fn write_container(&self, bytes: &[u8]) -> Result<(), StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write {
            location: self.location(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }

        // Write to tmp file
        fs::write(&self.tmp_path, bytes).map_err(write_err)?;

        // Atomic rename
        if let Err(e) = fs::rename(&self.tmp_path, &self.path) {
            let _ = fs::remove_file(&self.tmp_path);
            return Err(write_err(e));
        }

        info!("Container saved");
        Ok(())
    }
}
