use crate::api::{ApiClient, ApiError, LeaveDecision, LeaveRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRequestsRepository {
    client: Rc<ApiClient>,
}

impl LeaveRequestsRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_mine(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.list_my_leaves().await
    }

    pub async fn list_all(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.list_leaves().await
    }

    pub async fn review(&self, id: i64, decision: LeaveDecision) -> Result<LeaveRecord, ApiError> {
        self.client.review_leave(id, decision).await
    }
}

impl Default for LeaveRequestsRepository {
    fn default() -> Self {
        Self::new()
    }
}
