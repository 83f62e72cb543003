use crate::api::{ApiClient, ApiError, LeaveRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveSummaryRepository {
    client: Rc<ApiClient>,
}

impl LeaveSummaryRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Leave records for every employee.
    pub async fn all_records(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.list_leave_summary_records().await
    }

    /// The signed-in employee's approved leave.
    pub async fn my_records(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.list_my_approved_leaves().await
    }
}

impl Default for LeaveSummaryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::sign_in_storage;
    use serde_json::json;

    #[tokio::test]
    async fn summary_sources_use_admin_and_employee_endpoints() {
        sign_in_storage();
        let server = MockServer::start_async().await;
        let approved = json!({
            "id": 1,
            "employee": 12,
            "leave_type": "Sick",
            "start_date": "2024-02-01",
            "end_date": "2024-02-02",
            "days_taken": 2,
            "status": "Approved"
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/leaves/employees/leave-summary/");
            then.status(200).json_body(json!([approved.clone()]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/leaves/employee/approve/leaves-requests/");
            then.status(200).json_body(json!([]));
        });
        let repo = LeaveSummaryRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let all = repo.all_records().await.unwrap();
        let mine = repo.my_records().await.unwrap();

        assert_eq!(all[0].employee.as_ref().and_then(|e| e.id()), Some(12));
        assert!(mine.is_empty());
        assert_eq!(server.hits(), 2);
    }
}
