use super::{
    client::ApiClient,
    types::{AddLeaveRequest, ApiError, CreateLeaveRequest, LeaveRecord, ListPayload},
};

const LEAVES: &str = "/leaves/leaves/";
const MY_LEAVES: &str = "/leaves/employee/leaves-requests/";
const MY_APPROVED_LEAVES: &str = "/leaves/employee/approve/leaves-requests/";
const LEAVE_SUMMARY: &str = "/leaves/employees/leave-summary/";
const ADD_LEAVES: &str = "/leaves/add-leaves/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDecision {
    Approve,
    Reject,
}

impl LeaveDecision {
    pub fn path_segment(&self) -> &'static str {
        match self {
            LeaveDecision::Approve => "approve",
            LeaveDecision::Reject => "reject",
        }
    }
}

impl ApiClient {
    pub async fn list_leaves(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.get_leave_list(LEAVES).await
    }

    pub async fn list_my_leaves(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.get_leave_list(MY_LEAVES).await
    }

    pub async fn list_my_approved_leaves(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.get_leave_list(MY_APPROVED_LEAVES).await
    }

    pub async fn list_leave_summary_records(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.get_leave_list(LEAVE_SUMMARY).await
    }

    pub async fn create_leave(&self, payload: &CreateLeaveRequest) -> Result<(), ApiError> {
        let url = self.endpoint(LEAVES).await;
        let response = self
            .send_authorized(|client| client.post(url).json(payload))
            .await?;
        Self::map_empty_response(response).await
    }

    pub async fn add_employee_leave(&self, payload: &AddLeaveRequest) -> Result<(), ApiError> {
        let url = self.endpoint(ADD_LEAVES).await;
        let response = self
            .send_authorized(|client| client.post(url).json(payload))
            .await?;
        Self::map_empty_response(response).await
    }

    pub async fn review_leave(
        &self,
        id: i64,
        decision: LeaveDecision,
    ) -> Result<LeaveRecord, ApiError> {
        let url = format!(
            "{}{}/{}/",
            self.endpoint(LEAVES).await,
            id,
            decision.path_segment()
        );
        let response = self.send_authorized(|client| client.put(url)).await?;
        Self::map_json_response(response).await
    }

    async fn get_leave_list(&self, path: &str) -> Result<Vec<LeaveRecord>, ApiError> {
        let url = self.endpoint(path).await;
        let response = self.send_authorized(|client| client.get(url)).await?;
        Self::map_json_response::<ListPayload<LeaveRecord>>(response)
            .await
            .map(ListPayload::into_items)
    }
}
