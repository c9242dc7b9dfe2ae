//! Error types for the HMS client
//!
//! Every failure a command can hit is classified here: validation problems
//! caught before a request is sent, rejections from the backend, transport
//! failures, and local storage/config problems.

use crate::forms::FieldErrors;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Message shown when the backend gives no `detail` or `message`
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Typed failure for every client operation
#[derive(Error, Debug)]
pub enum ClientError {
    /// One or more form fields are missing or malformed. No request was sent.
    #[error("Invalid input: {0}")]
    Validation(FieldErrors),

    /// The backend answered with a non-2xx status
    #[error("Server error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// The backend rejected the credentials (401/403)
    #[error("Not authorized: {message}. Run 'hms login' to sign in again.")]
    Unauthorized { status: StatusCode, message: String },

    /// The request never produced a response
    #[error("Network request failed: {0}. Check your connection and the API URL.")]
    Http(#[from] reqwest::Error),

    /// A response or stored value was not valid JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Session storage (SQLite) failed
    #[error("Session storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// File system operation failed
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// An interactive prompt failed or was cancelled
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Shared helper failure (date parsing and friends)
    #[error(transparent)]
    Common(#[from] hms_common::HmsError),
}

impl ClientError {
    /// Build the failure for a non-2xx response
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Unauthorized { status, message }
        } else {
            Self::Api { status, message }
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a prompt error
    pub fn prompt(msg: impl Into<String>) -> Self {
        Self::Prompt(msg.into())
    }

    /// The single line shown to the user for this failure
    ///
    /// Backend rejections show the server's own message. Everything else
    /// shows the full error text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } | Self::Unauthorized { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Field-level errors, when this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

impl From<FieldErrors> for ClientError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<inquire::InquireError> for ClientError {
    fn from(err: inquire::InquireError) -> Self {
        Self::Prompt(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_prefers_given_message() {
        let err = ClientError::from_status(StatusCode::BAD_REQUEST, Some("Bad date".into()));
        assert_eq!(err.user_message(), "Bad date");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_from_status_generic_fallback() {
        let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_unauthorized_classification() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, None);
        assert!(err.is_unauthorized());

        let err = ClientError::from_status(StatusCode::FORBIDDEN, Some("Nope".into()));
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Nope");
    }

    #[test]
    fn test_validation_exposes_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Email is required");
        let err = ClientError::from(errors);

        let fields = err.field_errors().unwrap();
        assert_eq!(fields.get("email"), Some("Email is required"));
        assert!(err.user_message().contains("Email is required"));
    }
}
