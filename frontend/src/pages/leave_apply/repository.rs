use crate::api::{ApiClient, ApiError, CreateLeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveApplicationRepository {
    client: Rc<ApiClient>,
}

impl LeaveApplicationRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, payload: CreateLeaveRequest) -> Result<(), ApiError> {
        self.client.create_leave(&payload).await
    }
}

impl Default for LeaveApplicationRepository {
    fn default() -> Self {
        Self::new()
    }
}
