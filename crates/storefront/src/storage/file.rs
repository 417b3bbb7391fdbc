//! File-backed snapshot storage.

use std::io;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Snapshot storage that keeps one JSON file per key under a data
/// directory.
///
/// The directory is created lazily on first write, so constructing the
/// store never touches the filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a file storage rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory this storage writes under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("baksho-storage-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_get_absent_key() {
        let storage = JsonFileStorage::new(scratch_dir());
        assert!(storage.get("cart").unwrap().is_none());
    }

    #[test]
    fn test_set_get_remove() {
        let dir = scratch_dir();
        let storage = JsonFileStorage::new(&dir);

        storage.set("cart", "[]").unwrap();
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("[]"));

        storage.remove("cart").unwrap();
        assert!(storage.get("cart").unwrap().is_none());

        // Removing again is a no-op
        storage.remove("cart").unwrap();

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_set_overwrites() {
        let dir = scratch_dir();
        let storage = JsonFileStorage::new(&dir);

        storage.set("language", "\"EN\"").unwrap();
        storage.set("language", "\"DE\"").unwrap();
        assert_eq!(storage.get("language").unwrap().as_deref(), Some("\"DE\""));

        std::fs::remove_dir_all(dir).unwrap();
    }
}
