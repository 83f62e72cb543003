use reqwest::StatusCode;
use serde_json::{json, Value};

use super::{
    client::ApiClient,
    types::{server_message, ApiError, ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse},
};

const LOGIN: &str = "/users/login/";
const LOGOUT: &str = "/users/logout/";
const CHANGE_PASSWORD: &str = "/users/change-password/";

pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint(LOGIN).await;
        let response = self
            .send_public(|client| client.post(url).json(request))
            .await?;
        let status = response.status();
        if status.is_success() {
            return Self::map_json_response(response).await;
        }
        let body = response.json::<Value>().await.ok();
        let has_message = body.as_ref().and_then(server_message).is_some();
        let mut error = ApiError::from_status(status.as_u16(), body);
        if !has_message && matches!(status, StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED) {
            error.error = INVALID_CREDENTIALS.to_string();
        }
        Err(error)
    }

    pub async fn logout(&self, refresh_token: Option<String>) -> Result<(), ApiError> {
        let url = self.endpoint(LOGOUT).await;
        let body = json!({ "refresh_token": refresh_token });
        let response = self
            .send_authorized(|client| client.post(url).json(&body))
            .await?;
        Self::map_empty_response(response).await
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint(CHANGE_PASSWORD).await;
        let response = self
            .send_authorized(|client| client.post(url).json(request))
            .await?;
        Self::map_json_response(response).await
    }
}
