//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `BAKSHO_DATA_DIR` - Directory for persisted JSON snapshots
//!   (default: `.baksho`)
//! - `BAKSHO_API_LATENCY_MS` - Simulated network delay for mock API
//!   calls in milliseconds; 0 disables the delay (default: 250)

use std::path::PathBuf;

use thiserror::Error;

use crate::api::Latency;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the snapshot storage writes under.
    pub data_dir: PathBuf,
    /// Simulated mock API latency in milliseconds.
    pub api_latency_ms: u64,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("BAKSHO_DATA_DIR", ".baksho"));
        let api_latency_ms = get_env_or_default("BAKSHO_API_LATENCY_MS", "250")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("BAKSHO_API_LATENCY_MS".to_string(), e.to_string())
            })?;

        Ok(Self {
            data_dir,
            api_latency_ms,
        })
    }

    /// The simulated latency the mock repositories should apply.
    #[must_use]
    pub const fn latency(&self) -> Latency {
        Latency::from_millis(self.api_latency_ms)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".baksho"),
            api_latency_ms: 250,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
