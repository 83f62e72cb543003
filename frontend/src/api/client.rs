use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::ApiError, config, router::LOGIN_PATH, state::session, utils::navigation};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Sends a request carrying the stored bearer token.
    ///
    /// A missing token or a 401 answer ends the session and sends the browser
    /// back to the login view.
    pub(crate) async fn send_authorized<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: FnOnce(&Client) -> RequestBuilder,
    {
        let Some(token) = session::stored_token() else {
            Self::handle_unauthorized_status(StatusCode::UNAUTHORIZED);
            return Err(ApiError::unauthorized());
        };
        let request = build(&self.client)
            .bearer_auth(token)
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;
        let response = dispatch(&self.client, request).await?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    pub(crate) async fn send_public<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: FnOnce(&Client) -> RequestBuilder,
    {
        let request = build(&self.client)
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;
        dispatch(&self.client, request).await
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Session rejected by the API; signing out");
            session::clear();
            navigation::redirect_if_elsewhere(LOGIN_PATH);
        }
    }

    pub(crate) async fn map_json_response<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    pub(crate) async fn map_bytes_response(response: Response) -> Result<Vec<u8>, ApiError> {
        if response.status().is_success() {
            response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|e| ApiError::unknown(format!("Failed to read response body: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    async fn map_error_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.ok();
        let error = ApiError::from_status(status, body);
        log::warn!("API request failed ({}): {}", status, error.error);
        error
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
async fn dispatch(client: &Client, request: reqwest::Request) -> Result<Response, ApiError> {
    client
        .execute(request)
        .await
        .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
async fn dispatch(client: &Client, request: reqwest::Request) -> Result<Response, ApiError> {
    if let Some(responder) = find_mock(request.url().as_str()) {
        return responder.respond(&request)?.into_response();
    }
    client
        .execute(request)
        .await
        .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::find_mock;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_registry {
    use super::*;
    use std::sync::{Arc, Mutex, OnceLock};

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone, Debug)]
    pub struct MockResponse {
        status: u16,
        content_type: &'static str,
        body: Vec<u8>,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self {
                status,
                content_type: "application/json",
                body: body.to_string().into_bytes(),
            }
        }

        pub fn bytes(status: u16, content_type: &'static str, body: Vec<u8>) -> Self {
            Self {
                status,
                content_type,
                body,
            }
        }

        pub(super) fn into_response(self) -> Result<Response, ApiError> {
            let response = http::Response::builder()
                .status(self.status)
                .header(http::header::CONTENT_TYPE, self.content_type)
                .body(self.body)
                .map_err(|e| ApiError::unknown(format!("Invalid mock response: {}", e)))?;
            Ok(Response::from(response))
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        if let Ok(mut entries) = registry().lock() {
            entries.retain(|(url, _)| url != &base_url);
            entries.push((base_url, responder));
        }
    }

    pub(super) fn find_mock(url: &str) -> Option<Arc<dyn TestResponder>> {
        let entries = registry().lock().ok()?;
        entries
            .iter()
            .filter(|(base, _)| url.starts_with(base.as_str()))
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| responder.clone())
    }
}
