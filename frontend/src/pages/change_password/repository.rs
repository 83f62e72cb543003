use crate::api::{ApiClient, ApiError, ChangePasswordRequest, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ChangePasswordRepository {
    client: Rc<ApiClient>,
}

impl ChangePasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.change_password(&request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::sign_in_storage;
    use serde_json::json;

    fn request() -> ChangePasswordRequest {
        ChangePasswordRequest {
            current_password: "old-pass".into(),
            new_password: "new-pass".into(),
            confirm_password: "new-pass".into(),
        }
    }

    #[tokio::test]
    async fn change_password_posts_all_three_fields() {
        sign_in_storage();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/users/change-password/");
            then.status(200)
                .json_body(json!({ "message": "Password changed successfully." }));
        });
        let repo = ChangePasswordRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));

        let response = repo.change_password(request()).await.unwrap();

        assert_eq!(response.message.as_deref(), Some("Password changed successfully."));
        assert_eq!(
            server.received()[0].body,
            Some(json!({
                "current_password": "old-pass",
                "new_password": "new-pass",
                "confirm_password": "new-pass"
            }))
        );
    }

    #[tokio::test]
    async fn wrong_current_password_returns_server_error_text() {
        sign_in_storage();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/users/change-password/");
            then.status(400)
                .json_body(json!({ "error": "Current password is incorrect." }));
        });
        let repo = ChangePasswordRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));

        let err = repo.change_password(request()).await.unwrap_err();

        assert_eq!(err.error, "Current password is incorrect.");
    }
}
