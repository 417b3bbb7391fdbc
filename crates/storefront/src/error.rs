//! Unified error handling for the storefront.
//!
//! Provides a crate-level `StorefrontError` aggregating the module error
//! types, for callers (the CLI, tests) that drive several subsystems and
//! want one error to propagate with `?`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::checkout::CheckoutError;
use crate::storage::StorageError;
use crate::stores::session::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Snapshot storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Session operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");
    }

    #[test]
    fn test_auth_error_converts() {
        let err: StorefrontError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Auth error: Invalid email or password");
    }
}
