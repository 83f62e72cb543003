use reqwest::StatusCode;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, LeaveBalance, LeaveBalancePayload, ListPayload},
};

const LEAVE_BALANCES: &str = "/leaves/leave-balances/";
const MY_LEAVE_BALANCE: &str = "/leaves/leaves/employee-leave-balance";

impl ApiClient {
    pub async fn list_leave_balances(&self) -> Result<Vec<LeaveBalance>, ApiError> {
        let url = self.endpoint(LEAVE_BALANCES).await;
        let response = self.send_authorized(|client| client.get(url)).await?;
        Self::map_json_response::<ListPayload<LeaveBalance>>(response)
            .await
            .map(ListPayload::into_items)
    }

    pub async fn create_leave_balance(&self, payload: &LeaveBalancePayload) -> Result<(), ApiError> {
        let url = self.endpoint(LEAVE_BALANCES).await;
        let response = self
            .send_authorized(|client| client.post(url).json(payload))
            .await?;
        Self::map_empty_response(response).await
    }

    pub async fn update_leave_balance(
        &self,
        id: i64,
        payload: &LeaveBalancePayload,
    ) -> Result<(), ApiError> {
        let url = format!("{}{}/", self.endpoint(LEAVE_BALANCES).await, id);
        let response = self
            .send_authorized(|client| client.put(url).json(payload))
            .await?;
        Self::map_empty_response(response).await
    }

    /// The signed-in employee's balance; `None` when no balance record exists yet.
    pub async fn my_leave_balance(&self) -> Result<Option<LeaveBalance>, ApiError> {
        let url = self.endpoint(MY_LEAVE_BALANCE).await;
        let response = self.send_authorized(|client| client.get(url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: Value = Self::map_json_response(response).await?;
        parse_own_balance(body)
    }
}

/// The endpoint answers with an object, a one-element list, or nothing useful.
fn parse_own_balance(body: Value) -> Result<Option<LeaveBalance>, ApiError> {
    let record = match body {
        Value::Array(items) => items.into_iter().next(),
        Value::Object(ref map) if map.is_empty() => None,
        Value::Null => None,
        other => Some(other),
    };
    record
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| ApiError::unknown(format!("Failed to parse leave balance: {}", e)))
}
