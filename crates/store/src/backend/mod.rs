//! Pluggable key-value backends.
//!
//! The store persists every collection as a text blob under a named key,
//! the contract a browser's local storage offers. [`StorageBackend`]
//! captures exactly that surface so the facade can run against an
//! in-memory map in tests and a JSON document on disk everywhere else.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::StoreError;

/// A named-key text store.
///
/// Implementations are synchronous; a call runs to completion before the
/// caller regains control. There is no cross-process coordination - two
/// processes sharing a [`FileBackend`] path race with last-write-wins at
/// whole-document granularity.
pub trait StorageBackend: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Drop `key` and its value. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
