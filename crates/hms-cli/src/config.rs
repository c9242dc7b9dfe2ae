//! Configuration management for the HMS client
//!
//! Settings are resolved once at start-up from the environment (a `.env`
//! file is honored) and never change afterwards.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Backend URL for local development, used when `HMS_API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds (`HMS_API_TIMEOUT_SECS`)
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Session database file name inside the data directory
pub const SESSION_DB_FILE: &str = "session.db";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL
    pub api_url: String,

    /// SQLite file holding the session tokens. `None` means the default
    /// location under the user data directory, resolved on first use.
    pub session_db: Option<PathBuf>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_db: None,
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `HMS_API_URL`, `HMS_SESSION_DB` and `HMS_API_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("HMS_API_URL") {
            if !url.trim().is_empty() {
                config.api_url = url;
            }
        }

        if let Ok(path) = std::env::var("HMS_SESSION_DB") {
            if !path.trim().is_empty() {
                config.session_db = Some(PathBuf::from(path));
            }
        }

        if let Ok(secs) = std::env::var("HMS_API_TIMEOUT_SECS") {
            config.timeout_secs = secs.parse().map_err(|_| {
                ClientError::config(format!(
                    "HMS_API_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    secs
                ))
            })?;
        }

        Ok(config)
    }

    /// Replace the API URL (command-line override)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_session_db(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_db = Some(path.into());
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Session database path, falling back to `<data dir>/hms/session.db`
    pub fn session_db_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.session_db {
            return Ok(path.clone());
        }

        Ok(dirs::data_dir()
            .ok_or_else(|| {
                ClientError::config(
                    "Could not determine data directory. Set HMS_SESSION_DB or pass --no-persist.",
                )
            })?
            .join("hms")
            .join(SESSION_DB_FILE))
    }
}
