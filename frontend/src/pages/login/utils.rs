use crate::api::{ApiError, LoginRequest};
use leptos::*;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn reset_password(&self) {
        self.password.set(String::new());
    }

    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        validate_credentials(&self.username.get_untracked(), &self.password.get_untracked())
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
    }
    Ok(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_credentials_requires_both_fields() {
        assert!(validate_credentials("", "secret").unwrap_err().is_validation());
        assert!(validate_credentials("   ", "secret").is_err());
        assert!(validate_credentials("jdoe", "").is_err());
    }

    #[test]
    fn validate_credentials_trims_username_only() {
        let request = validate_credentials("  jdoe ", " pass ").unwrap();
        assert_eq!(request.username, "jdoe");
        assert_eq!(request.password, " pass ");
    }
}
