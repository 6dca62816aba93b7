//! File-backed storage backend.
//!
//! One file per key under a root directory. Key names are percent-encoded
//! into file names, so scoped keys containing an email (`@`, and whatever
//! else an email brings along) stay inside the directory. Writes go through
//! a temp file and a rename, so a reader never observes a half-written
//! value - the same per-key atomicity the store expects from its port.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{StorageError, StoragePort};
use crate::keys::StorageKey;

/// A storage backend persisting each key to its own file.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created,
    /// including when `root` exists but is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory this storage persists into.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_name(key: &StorageKey) -> String {
        urlencoding::encode(&key.name()).into_owned()
    }

    fn path_for(&self, key: &StorageKey) -> PathBuf {
        self.root.join(Self::file_name(key))
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &StorageKey, value: &str) -> Result<(), StorageError> {
        let file_name = Self::file_name(key);
        // Dot-prefixed temp name cannot collide with a key file: encoded key
        // names never start with a dot.
        let tmp = self.root.join(format!(".{file_name}.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.root.join(file_name))?;
        Ok(())
    }

    fn remove(&mut self, key: &StorageKey) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
