//! The store object.
//!
//! One `Store` value owns a [`StorageBackend`] and a subscriber registry;
//! every collection operation lives in an `impl Store` block next to its
//! record type's module. There is no ambient state: per-user operations
//! take the user's ID, and the logged-in user is an ordinary record under
//! its own key.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::backend::{FileBackend, MemoryBackend, StorageBackend};
use crate::error::StoreError;
use crate::events::{StoreEvent, Subscribers, Subscription};

/// Persistence facade over a named-key text store.
///
/// Mutations are read-modify-write over whole collections and run to
/// completion synchronously; consumers observe changes by subscribing and
/// re-querying. Failure semantics follow the storage model: reads never
/// fail (absent or unreadable state is empty), writes surface backend I/O
/// errors.
pub struct Store {
    backend: Box<dyn StorageBackend>,
    subscribers: Subscribers,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Create a store over the given backend.
    #[must_use]
    pub fn with_backend(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            subscribers: Subscribers::default(),
        }
    }

    /// Create a store holding everything in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    /// Open a store backed by the JSON document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the document exists but cannot be
    /// read, or its parent directory cannot be created.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        Ok(Self::with_backend(FileBackend::open(path)?))
    }

    /// Register a callback invoked synchronously after every mutation.
    pub fn subscribe(
        &self,
        callback: impl Fn(StoreEvent) + Send + Sync + 'static,
    ) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    /// Remove a subscription; returns whether it was still registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.subscribers.unsubscribe(subscription)
    }

    // ------------------------------------------------------------------
    // Collection plumbing used by the per-collection impl blocks.
    // ------------------------------------------------------------------

    /// Load a collection; absent means empty.
    pub(crate) fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read_collection_or(key, Vec::new)
    }

    /// Load a collection, substituting `fallback` when the key is absent
    /// or its contents are unreadable.
    pub(crate) fn read_collection_or<T: DeserializeOwned>(
        &self,
        key: &str,
        fallback: impl FnOnce() -> Vec<T>,
    ) -> Vec<T> {
        match self.backend.get(key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!(key, %err, "stored collection unreadable, treating as absent");
                    fallback()
                }
            },
            None => fallback(),
        }
    }

    /// Serialize and overwrite a whole collection, then notify.
    pub(crate) fn write_collection<T: Serialize>(
        &self,
        key: &str,
        items: &[T],
        event: StoreEvent,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(key, &raw)?;
        debug!(key, count = items.len(), "collection written");
        self.subscribers.emit(event);
        Ok(())
    }

    /// Load a single record; absent or unreadable means `None`.
    pub(crate) fn read_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(key, %err, "stored record unreadable, treating as absent");
                None
            }
        }
    }

    /// Serialize and overwrite a single record, then notify.
    pub(crate) fn write_record<T: Serialize>(
        &self,
        key: &str,
        record: &T,
        event: StoreEvent,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record)?;
        self.backend.set(key, &raw)?;
        self.subscribers.emit(event);
        Ok(())
    }

    /// Drop a key entirely, then notify.
    pub(crate) fn remove_key(&self, key: &str, event: StoreEvent) -> Result<(), StoreError> {
        self.backend.remove(key)?;
        self.subscribers.emit(event);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_read_absent_collection_is_empty() {
        let store = Store::in_memory();
        let items: Vec<u32> = store.read_collection("nothing");
        assert!(items.is_empty());
    }

    #[test]
    fn test_unreadable_collection_falls_back() {
        let store = Store::in_memory();
        store.backend.set("broken", "{not json").unwrap();

        let items: Vec<u32> = store.read_collection("broken");
        assert!(items.is_empty());

        let replaced = store.read_collection_or("broken", || vec![7_u32]);
        assert_eq!(replaced, vec![7]);
    }

    #[test]
    fn test_write_emits_the_given_event() {
        let store = Store::in_memory();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |event| sink.lock().unwrap().push(event));

        store
            .write_collection("cart", &[1_u32, 2], StoreEvent::CartChanged)
            .unwrap();
        store.remove_key("cart", StoreEvent::CartChanged).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![StoreEvent::CartChanged, StoreEvent::CartChanged]
        );
    }
}
