//! Account registration form

use super::{is_blank, FieldErrors};
use crate::api::{ApiClient, Message, RegisterRequest};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterForm {
    pub fn validate(&self) -> std::result::Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let required = [
            ("username", &self.username, "Username is required"),
            ("email", &self.email, "Email is required"),
            ("first_name", &self.first_name, "First name is required"),
            ("last_name", &self.last_name, "Last name is required"),
        ];
        for (field, value, message) in required {
            if is_blank(value) {
                errors.insert(field, message);
            }
        }

        if !is_blank(&self.email) && !self.email.contains('@') {
            errors.insert("email", "Email must be a valid address");
        }

        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }

        if self.confirm_password != self.password {
            errors.insert("confirm_password", "Passwords do not match");
        }

        errors.into_result()?;

        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
        })
    }

    pub async fn submit(&self, client: &ApiClient) -> Result<Message> {
        let request = self.validate()?;
        client.auth().register(&request).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password: "correct-horse".to_string(),
            confirm_password: "correct-horse".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let request = valid_form().validate().unwrap();
        assert_eq!(request.username, "jdoe");
        assert_eq!(request.email, "jdoe@example.com");
    }

    #[test]
    fn test_required_fields() {
        let errors = RegisterForm::default().validate().unwrap_err();
        for field in ["username", "email", "first_name", "last_name", "password"] {
            assert!(errors.contains(field), "{} should be flagged", field);
        }
        assert!(!errors.contains("confirm_password"));
    }

    #[test]
    fn test_invalid_email() {
        let mut form = valid_form();
        form.email = "jdoe.example.com".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email must be a valid address"));
    }

    #[test]
    fn test_short_password_is_accepted() {
        let mut form = valid_form();
        form.password = "pw".to_string();
        form.confirm_password = "pw".to_string();
        let request = form.validate().unwrap();
        assert_eq!(request.password, "pw");
    }

    #[test]
    fn test_password_mismatch() {
        let mut form = valid_form();
        form.confirm_password = "something-else".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
    }
}
