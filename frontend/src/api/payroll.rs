use reqwest::header::ACCEPT;

use super::{
    client::ApiClient,
    types::{ApiError, ListPayload, PayrollRecord},
};
use crate::utils::download::PDF_MIME;

const MY_PAYROLL: &str = "/employees/employee/payroll/";

impl ApiClient {
    pub async fn list_my_payslips(&self) -> Result<Vec<PayrollRecord>, ApiError> {
        let url = self.endpoint(MY_PAYROLL).await;
        let response = self.send_authorized(|client| client.get(url)).await?;
        Self::map_json_response::<ListPayload<PayrollRecord>>(response)
            .await
            .map(ListPayload::into_items)
    }

    pub async fn download_payslip_pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}{}/pdf/", self.endpoint(MY_PAYROLL).await, id);
        let response = self
            .send_authorized(|client| client.get(url).header(ACCEPT, PDF_MIME))
            .await?;
        Self::map_bytes_response(response).await
    }
}
