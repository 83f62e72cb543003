use crate::api::{ApiClient, ApiError, Employee, LeaveBalance, LeaveBalancePayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveBalancesRepository {
    client: Rc<ApiClient>,
}

impl LeaveBalancesRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn list_balances(&self) -> Result<Vec<LeaveBalance>, ApiError> {
        self.client.list_leave_balances().await
    }

    /// Creates when `id` is `None`, otherwise replaces the full record.
    pub async fn save(&self, id: Option<i64>, payload: LeaveBalancePayload) -> Result<(), ApiError> {
        match id {
            Some(id) => self.client.update_leave_balance(id, &payload).await,
            None => self.client.create_leave_balance(&payload).await,
        }
    }

    pub async fn my_balance(&self) -> Result<Option<LeaveBalance>, ApiError> {
        self.client.my_leave_balance().await
    }
}

impl Default for LeaveBalancesRepository {
    fn default() -> Self {
        Self::new()
    }
}
