//! Durable client-side key/value snapshots.
//!
//! The browser build of this app keeps its state in `localStorage`; this
//! module is that contract as a trait. Values are opaque strings (always
//! JSON in practice), written wholesale on every store mutation and read
//! back once at store construction.
//!
//! ## Keys
//!
//! - [`keys::CART`] - array of cart lines
//! - [`keys::USER`] - active session object, absent when logged out
//! - [`keys::LANGUAGE`] - selected locale code
//! - [`keys::BANNERS`] - full banner collection
//!
//! ## Limitations
//!
//! There is no cross-process coordination: two processes sharing a data
//! directory each keep independent in-memory state and clobber each
//! other's snapshot on their next write. This mirrors the two-browser-tab
//! behavior of the original storage model and is not fixed here.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage keys for persisted state.
pub mod keys {
    /// Key for the serialized cart line list.
    pub const CART: &str = "cart";

    /// Key for the active user session (password never included).
    pub const USER: &str = "user";

    /// Key for the selected display language.
    pub const LANGUAGE: &str = "language";

    /// Key for the full promotional banner collection.
    pub const BANNERS: &str = "baksho_banners";
}

/// Errors from the snapshot layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for writing.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A `localStorage`-shaped string key/value store.
pub trait Storage: Send + Sync {
    /// Read the raw value for `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing medium fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing medium fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` entirely. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing medium fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and deserialize a JSON snapshot.
///
/// A snapshot that is absent, unreadable, or fails to parse yields `None`;
/// read and parse failures are logged rather than surfaced, so a corrupted
/// snapshot degrades to the caller's default state.
pub fn read_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read snapshot, using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "snapshot failed to parse, using default");
            None
        }
    }
}

/// Serialize and write a JSON snapshot.
///
/// # Errors
///
/// Returns [`StorageError`] if serialization or the write fails.
pub fn write_json<T: Serialize>(
    storage: &dyn Storage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}
