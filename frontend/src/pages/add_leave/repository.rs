use crate::api::{AddLeaveRequest, ApiClient, ApiError, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct AddLeaveRepository {
    client: Rc<ApiClient>,
}

impl AddLeaveRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn submit(&self, payload: AddLeaveRequest) -> Result<(), ApiError> {
        self.client.add_employee_leave(&payload).await
    }
}

impl Default for AddLeaveRepository {
    fn default() -> Self {
        Self::new()
    }
}
