use super::{
    client::ApiClient,
    types::{ApiError, Employee, ListPayload, SalaryDetails},
};

const EMPLOYEES: &str = "/employees/view_all_employees/";
const MY_SALARY_DETAILS: &str = "/employees/employee/salary-details/";

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint(EMPLOYEES).await;
        let response = self.send_authorized(|client| client.get(url)).await?;
        Self::map_json_response::<ListPayload<Employee>>(response)
            .await
            .map(ListPayload::into_items)
    }

    pub async fn my_salary_details(&self) -> Result<SalaryDetails, ApiError> {
        let url = self.endpoint(MY_SALARY_DETAILS).await;
        let response = self.send_authorized(|client| client.get(url)).await?;
        Self::map_json_response(response).await
    }
}
