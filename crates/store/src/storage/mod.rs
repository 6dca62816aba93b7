//! Storage backends.
//!
//! The store talks to persistence through [`StoragePort`], a string-valued
//! key/value interface with the same shape as browser-local storage: whole
//! values only, per-key atomicity, no transactions. Two implementations are
//! provided - [`MemoryStorage`] for tests and [`FileStorage`] for durable
//! state on disk.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

use crate::keys::StorageKey;

/// Errors a storage backend can raise.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The persistence layer is missing, disabled, or refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A disk-backed backend hit an I/O failure.
    #[error("storage i/o error")]
    Io(#[from] std::io::Error),
}

/// Key/value persistence for store state.
///
/// Values are opaque strings; serialization is the caller's concern. `set`
/// replaces any previous value whole, and `remove` on an absent key is not
/// an error. Implementations are synchronous and single-threaded, matching
/// the store's execution model.
pub trait StoragePort {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read at all;
    /// an absent key is `Ok(None)`.
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value could not be persisted.
    fn set(&mut self, key: &StorageKey, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejected the removal;
    /// removing an absent key is `Ok(())`.
    fn remove(&mut self, key: &StorageKey) -> Result<(), StorageError>;
}
