//! In-memory storage backend.

use std::collections::BTreeMap;

use super::{StorageError, StoragePort};
use crate::keys::StorageKey;

/// A storage backend that keeps everything in a map.
///
/// Used by tests and by callers that want a scratch store with no
/// persistence. The outage switch makes every operation fail with
/// [`StorageError::Unavailable`], which is how degrade paths are exercised
/// without a real broken backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    offline: bool,
}

impl MemoryStorage {
    /// Create an empty, available storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the outage switch. While offline, every operation errors.
    pub const fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Whether the outage switch is on.
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.offline
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by its literal key name, bypassing the port.
    ///
    /// Lets tests assert on the exact names written to storage.
    #[must_use]
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Plant a value under a literal key name, bypassing the port.
    ///
    /// Lets tests seed legacy or malformed data exactly as a previous
    /// implementation would have written it.
    pub fn set_raw(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    fn check_online(&self) -> Result<(), StorageError> {
        if self.offline {
            return Err(StorageError::Unavailable("storage is offline".to_owned()));
        }
        Ok(())
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StorageError> {
        self.check_online()?;
        Ok(self.entries.get(&key.name()).cloned())
    }

    fn set(&mut self, key: &StorageKey, value: &str) -> Result<(), StorageError> {
        self.check_online()?;
        self.entries.insert(key.name(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &StorageKey) -> Result<(), StorageError> {
        self.check_online()?;
        self.entries.remove(&key.name());
        Ok(())
    }
}
