//! Login form

use super::{is_blank, FieldErrors};
use crate::api::{ApiClient, TokenPair};
use crate::error::Result;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are required; each missing one is flagged
    pub fn validate(&self) -> std::result::Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.email) {
            errors.insert("email", "Email is required");
        }

        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }

        errors.into_result()
    }

    /// Validate, log in, and persist the issued token pair
    pub async fn submit(&self, client: &ApiClient) -> Result<TokenPair> {
        self.validate()?;

        let tokens = client.auth().login(self.email.trim(), &self.password).await?;
        client
            .credentials()
            .set_tokens(&tokens.access, &tokens.refresh)?;

        info!(email = %self.email.trim(), "Logged in");
        Ok(tokens)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    #[test]
    fn test_empty_email() {
        let errors = LoginForm::new("", "secret").validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert!(!errors.contains("password"));
    }

    #[test]
    fn test_empty_password() {
        let errors = LoginForm::new("nurse@example.com", "").validate().unwrap_err();
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert!(!errors.contains("email"));
    }

    #[test]
    fn test_both_empty() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }

    #[test]
    fn test_whitespace_email_is_empty() {
        let errors = LoginForm::new("   ", "secret").validate().unwrap_err();
        assert!(errors.contains("email"));
    }

    #[test]
    fn test_valid_form() {
        assert!(LoginForm::new("nurse@example.com", "secret").validate().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_submit_never_reaches_network() {
        // Nothing listens on port 9; a request would surface as Http, not Validation
        let client = ApiClient::new("http://127.0.0.1:9", Credentials::in_memory()).unwrap();
        let err = LoginForm::new("", "").submit(&client).await.unwrap_err();
        assert!(err.field_errors().is_some());
        assert!(!client.credentials().is_authenticated());
    }
}
