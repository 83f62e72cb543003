use crate::api::{ApiClient, ApiError, LeaveBalance, LeaveRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn all_leaves(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.list_leaves().await
    }

    pub async fn summary_records(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.list_leave_summary_records().await
    }

    pub async fn my_balance(&self) -> Result<Option<LeaveBalance>, ApiError> {
        self.client.my_leave_balance().await
    }

    pub async fn my_approved_leaves(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.list_my_approved_leaves().await
    }
}
