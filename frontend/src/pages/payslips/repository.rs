use crate::api::{ApiClient, ApiError, PayrollRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct PayslipsRepository {
    client: Rc<ApiClient>,
}

impl PayslipsRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<PayrollRecord>, ApiError> {
        self.client.list_my_payslips().await
    }

    pub async fn pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        self.client.download_payslip_pdf(id).await
    }
}

impl Default for PayslipsRepository {
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

    fn repo(server: &MockServer) -> PayslipsRepository {
        PayslipsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn list_parses_decimal_strings() {
        sign_in_storage();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/employee/payroll/");
            then.status(200).json_body(json!([{
                "id": 4,
                "month": "March",
                "year": 2024,
                "total_salary_for_month": "5230.50",
                "overtime_days": "2.00",
                "unpaid_days": "0.00",
                "other_deductions": "120.00",
                "remarks": "Bonus included"
            }]));
        });

        let slips = repo(&server).list().await.unwrap();

        assert_eq!(slips.len(), 1);
        assert_eq!(slips[0].total_salary_for_month, 5230.5);
        assert_eq!(slips[0].remarks.as_deref(), Some("Bonus included"));
    }

    #[tokio::test]
    async fn pdf_returns_raw_bytes() {
        sign_in_storage();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/employee/payroll/4/pdf/");
            then.status(200)
                .bytes_body("application/pdf", b"%PDF-1.4 test".to_vec());
        });

        let bytes = repo(&server).pdf(4).await.unwrap();

        assert_eq!(bytes, b"%PDF-1.4 test".to_vec());
    }
}
