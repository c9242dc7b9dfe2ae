//! Error types shared across HMS crates

use thiserror::Error;

/// Result type alias for shared HMS helpers
pub type Result<T> = std::result::Result<T, HmsError>;

/// Errors raised by the shared helpers
#[derive(Error, Debug)]
pub enum HmsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime { value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
