use crate::api::{ApiClient, ApiError, SalaryDetails};
use std::rc::Rc;

#[derive(Clone)]
pub struct SalaryDetailsRepository {
    client: Rc<ApiClient>,
}

impl SalaryDetailsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self) -> Result<SalaryDetails, ApiError> {
        self.client.my_salary_details().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::sign_in_storage;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_computes_total_when_server_omits_it() {
        sign_in_storage();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/employee/salary-details/");
            then.status(200).json_body(json!({
                "basic_salary": "3000.00",
                "housing_allowance": "800.00",
                "transport_allowance": "200.00",
                "other_allowance": "50.50",
                "bank_name": "First Bank",
                "iban": "GB00TEST"
            }));
        });
        let repo = SalaryDetailsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let details = repo.fetch().await.unwrap();

        assert_eq!(details.total(), 4050.5);
        assert_eq!(details.bank_name.as_deref(), Some("First Bank"));
        assert!(details.account_no.is_none());
    }
}
