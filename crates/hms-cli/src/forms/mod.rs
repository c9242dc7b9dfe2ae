//! Form models and field-level validation
//!
//! Forms are validated before any request is made. A failed validation
//! yields [`FieldErrors`] (one message per offending field) and the network
//! is never touched.

pub mod appointment;
pub mod login;
pub mod register;

pub use appointment::AppointmentForm;
pub use login::LoginForm;
pub use register::RegisterForm;

use std::collections::BTreeMap;
use std::fmt;

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message per field wins.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// True when the value is missing or only whitespace
#[inline]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Trimmed value, or `None` when blank
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("time", "Time is required");
        errors.insert("time", "Time must be in HH:MM format");
        assert_eq!(errors.get("time"), Some("Time is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_display_is_ordered() {
        let mut errors = FieldErrors::new();
        errors.insert("password", "Password is required");
        errors.insert("email", "Email is required");
        assert_eq!(
            errors.to_string(),
            "email: Email is required; password: Password is required"
        );
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.insert("doctor", "Doctor is required");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_blank_helpers() {
        assert!(is_blank("   "));
        assert!(!is_blank(" a "));
        assert_eq!(non_blank(Some("  checkup ")), Some("checkup".to_string()));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
