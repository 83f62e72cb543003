use crate::api::{types::server_message, ApiError, ChangePasswordRequest};
use leptos::*;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const MISMATCH_MESSAGE: &str = "New password and confirm password do not match.";
pub const FAILURE_MESSAGE: &str = "Failed to change password.";
pub const SUCCESS_MESSAGE: &str = "Password changed successfully.";

#[derive(Clone, Copy)]
pub struct PasswordFormState {
    pub current_password: RwSignal<String>,
    pub new_password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
}

impl Default for PasswordFormState {
    fn default() -> Self {
        Self {
            current_password: create_rw_signal(String::new()),
            new_password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
        }
    }
}

impl PasswordFormState {
    pub fn reset(&self) {
        self.current_password.set(String::new());
        self.new_password.set(String::new());
        self.confirm_password.set(String::new());
    }

    pub fn to_request(&self) -> Result<ChangePasswordRequest, ApiError> {
        validate(
            self.current_password.get_untracked(),
            self.new_password.get_untracked(),
            self.confirm_password.get_untracked(),
        )
    }
}

pub fn validate(
    current_password: String,
    new_password: String,
    confirm_password: String,
) -> Result<ChangePasswordRequest, ApiError> {
    if current_password.is_empty() || new_password.is_empty() || confirm_password.is_empty() {
        return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
    }
    if new_password != confirm_password {
        return Err(ApiError::validation(MISMATCH_MESSAGE));
    }
    Ok(ChangePasswordRequest {
        current_password,
        new_password,
        confirm_password,
    })
}

/// Keeps the server's own explanation; anything else becomes the fixed failure text.
pub fn failure_message(err: ApiError) -> ApiError {
    let from_server = err.details.as_ref().and_then(server_message).is_some();
    if from_server || err.is_validation() || err.is_unauthorized() {
        err
    } else {
        ApiError {
            error: FAILURE_MESSAGE.into(),
            ..err
        }
    }
}
