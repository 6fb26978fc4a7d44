//! In-memory backend.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;

use super::StorageBackend;

/// A backend holding all keys in a process-local map.
///
/// Used by tests and as scratch storage; contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("k"), None);

        backend.set("k", "v").expect("set");
        assert_eq!(backend.get("k").as_deref(), Some("v"));

        backend.set("k", "v2").expect("overwrite");
        assert_eq!(backend.get("k").as_deref(), Some("v2"));

        backend.remove("k").expect("remove");
        assert_eq!(backend.get("k"), None);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let backend = MemoryBackend::new();
        backend.remove("missing").expect("remove");
    }
}
