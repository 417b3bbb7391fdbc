//! In-memory snapshot storage for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{Storage, StorageError};

/// Snapshot storage backed by a `HashMap`.
///
/// Used by tests and anywhere persistence across process restarts is not
/// wanted.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means another test thread panicked mid-write;
        // the map itself is still usable.
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("user").unwrap().is_none());

        storage.set("user", "{}").unwrap();
        assert_eq!(storage.get("user").unwrap().as_deref(), Some("{}"));

        storage.remove("user").unwrap();
        assert!(storage.get("user").unwrap().is_none());
    }
}
