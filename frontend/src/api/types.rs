use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    Annual,
    Sick,
    Unpaid,
    Maternity,
    Paternity,
    Compassionate,
    #[serde(rename = "Personal Leave")]
    Personal,
    #[serde(rename = "Emergency Leave")]
    Emergency,
    Other,
}

impl LeaveType {
    pub const ALL: [LeaveType; 9] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Unpaid,
        LeaveType::Maternity,
        LeaveType::Paternity,
        LeaveType::Compassionate,
        LeaveType::Personal,
        LeaveType::Emergency,
        LeaveType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual",
            LeaveType::Sick => "Sick",
            LeaveType::Unpaid => "Unpaid",
            LeaveType::Maternity => "Maternity",
            LeaveType::Paternity => "Paternity",
            LeaveType::Compassionate => "Compassionate",
            LeaveType::Personal => "Personal Leave",
            LeaveType::Emergency => "Emergency Leave",
            LeaveType::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Other(String),
}

impl LeaveStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Other(value) => value.as_str(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LeaveStatus::Pending)
    }
}

impl From<String> for LeaveStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => LeaveStatus::Pending,
            "Approved" => LeaveStatus::Approved,
            "Rejected" => LeaveStatus::Rejected,
            _ => LeaveStatus::Other(value),
        }
    }
}

impl From<LeaveStatus> for String {
    fn from(value: LeaveStatus) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl PersonRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Employee reference as returned by the backend: a nested record on admin
/// endpoints, a bare primary key elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeLink {
    Detail(PersonRef),
    Id(i64),
}

impl EmployeeLink {
    pub fn id(&self) -> Option<i64> {
        match self {
            EmployeeLink::Detail(person) => person.id,
            EmployeeLink::Id(id) => Some(*id),
        }
    }

    pub fn display_name(&self) -> Option<String> {
        match self {
            EmployeeLink::Detail(person) => Some(person.full_name()).filter(|n| !n.is_empty()),
            EmployeeLink::Id(_) => None,
        }
    }
}

/// List endpoints answer with a bare array, or a page object when the backend
/// has pagination switched on.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Items(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Items(items) => items,
            ListPayload::Paged { results } => results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub id: i64,
    #[serde(default)]
    pub employee: Option<EmployeeLink>,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub days_taken: f64,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub applied_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved_by: Option<PersonRef>,
}

impl LeaveRecord {
    pub fn employee_name(&self) -> String {
        match &self.employee {
            Some(link) => link
                .display_name()
                .or_else(|| link.id().map(|id| format!("#{}", id)))
                .unwrap_or_else(|| "-".to_string()),
            None => "-".to_string(),
        }
    }

    pub fn approver_name(&self) -> String {
        self.approved_by
            .as_ref()
            .map(PersonRef::full_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub days_taken: u32,
}

/// Leave recorded by an admin on behalf of `employee`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddLeaveRequest {
    pub employee: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub days_taken: u32,
    pub remarks: String,
}

/// The nine per-category counters shared by balance records and payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveCounters {
    #[serde(deserialize_with = "decimal::deserialize")]
    pub annual_leave_balance: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub sick_leave_balance: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub maternity_leave_balance: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub paternity_leave_balance: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub compassionate_leave_balance: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub unpaid_leave_balance: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub personal_leave_balance: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub emergency_leave_balance: f64,
    #[serde(alias = "others_leave_balance", deserialize_with = "decimal::deserialize")]
    pub other_leave_balance: f64,
}

impl LeaveCounters {
    pub const FIELDS: [(&'static str, &'static str); 9] = [
        ("annual_leave_balance", "Annual"),
        ("sick_leave_balance", "Sick"),
        ("maternity_leave_balance", "Maternity"),
        ("paternity_leave_balance", "Paternity"),
        ("compassionate_leave_balance", "Compassionate"),
        ("unpaid_leave_balance", "Unpaid"),
        ("personal_leave_balance", "Personal"),
        ("emergency_leave_balance", "Emergency"),
        ("other_leave_balance", "Other"),
    ];

    pub fn values(&self) -> [f64; 9] {
        [
            self.annual_leave_balance,
            self.sick_leave_balance,
            self.maternity_leave_balance,
            self.paternity_leave_balance,
            self.compassionate_leave_balance,
            self.unpaid_leave_balance,
            self.personal_leave_balance,
            self.emergency_leave_balance,
            self.other_leave_balance,
        ]
    }

    pub fn from_values(values: [f64; 9]) -> Self {
        let [annual, sick, maternity, paternity, compassionate, unpaid, personal, emergency, other] =
            values;
        Self {
            annual_leave_balance: annual,
            sick_leave_balance: sick,
            maternity_leave_balance: maternity,
            paternity_leave_balance: paternity,
            compassionate_leave_balance: compassionate,
            unpaid_leave_balance: unpaid,
            personal_leave_balance: personal,
            emergency_leave_balance: emergency,
            other_leave_balance: other,
        }
    }

    pub fn labelled(&self) -> Vec<(&'static str, f64)> {
        Self::FIELDS
            .iter()
            .zip(self.values())
            .map(|((_, label), value)| (*label, value))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub id: i64,
    pub employee: EmployeeLink,
    #[serde(default)]
    pub employee_details: Option<PersonRef>,
    #[serde(flatten)]
    pub counters: LeaveCounters,
}

impl LeaveBalance {
    pub fn employee_id(&self) -> Option<i64> {
        self.employee
            .id()
            .or_else(|| self.employee_details.as_ref().and_then(|p| p.id))
    }

    /// Name from the embedded details, then the nested employee, then `employees`.
    pub fn employee_name(&self, employees: &[Employee]) -> String {
        self.employee_details
            .as_ref()
            .map(PersonRef::full_name)
            .filter(|name| !name.is_empty())
            .or_else(|| self.employee.display_name())
            .or_else(|| {
                let id = self.employee_id()?;
                employees
                    .iter()
                    .find(|employee| employee.id == id)
                    .map(Employee::full_name)
            })
            .or_else(|| self.employee_id().map(|id| format!("#{}", id)))
            .unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalancePayload {
    pub employee: i64,
    #[serde(flatten)]
    pub counters: LeaveCounters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryDetails {
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub basic_salary: f64,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub housing_allowance: f64,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub transport_allowance: f64,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub other_allowance: f64,
    #[serde(default, deserialize_with = "decimal::deserialize_optional")]
    pub total_salary: Option<f64>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub account_no: Option<String>,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub swift_code: Option<String>,
}

impl SalaryDetails {
    pub fn total(&self) -> f64 {
        self.total_salary.unwrap_or(
            self.basic_salary
                + self.housing_allowance
                + self.transport_allowance
                + self.other_allowance,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    pub id: i64,
    pub month: String,
    pub year: i32,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub total_salary_for_month: f64,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub overtime_days: f64,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub unpaid_days: f64,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub other_deductions: f64,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const CODE_SERVER_ERROR: &str = "SERVER_ERROR";
pub const CODE_REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const CODE_UNKNOWN: &str = "UNKNOWN";

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_VALIDATION)
    }

    pub fn unauthorized() -> Self {
        Self::with_code(
            "Your session has expired. Please log in again.",
            CODE_UNAUTHORIZED,
        )
    }

    pub fn bad_request() -> Self {
        Self::with_code("Invalid data. Please check your input.", CODE_BAD_REQUEST)
    }

    pub fn server_error() -> Self {
        Self::with_code("Server error. Please try again later.", CODE_SERVER_ERROR)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_UNKNOWN)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_REQUEST_FAILED)
    }

    /// Builds an error from a non-success status and whatever JSON body came with it.
    pub fn from_status(status: u16, body: Option<Value>) -> Self {
        let server_message = body.as_ref().and_then(server_message);
        let fallback = match status {
            400 => Self::bad_request(),
            401 => Self::unauthorized(),
            500..=599 => Self::server_error(),
            other => Self::request_failed(format!("Request failed with status {}", other)),
        };
        Self {
            error: server_message.unwrap_or(fallback.error),
            code: fallback.code,
            details: body,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == CODE_VALIDATION
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == CODE_UNAUTHORIZED
    }
}

pub(crate) fn server_message(body: &Value) -> Option<String> {
    ["error", "detail", "message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Django serializes `DecimalField` as a string; accept either form.
pub(crate) mod decimal {
    use serde::{de::Error, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    fn parse<E: Error>(raw: Raw) -> Result<f64, E> {
        match raw {
            Raw::Number(value) => Ok(value),
            Raw::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid decimal: {}", text))),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse(Raw::deserialize(deserializer)?)
    }

    pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Raw>::deserialize(deserializer)?
            .map(parse)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn api_error_constructors_set_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, CODE_VALIDATION);
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());
        assert!(validation.is_validation());

        assert_eq!(ApiError::unknown("something failed").code, CODE_UNKNOWN);
        assert_eq!(ApiError::request_failed("network error").code, CODE_REQUEST_FAILED);
        assert!(ApiError::unauthorized().is_unauthorized());
    }

    #[wasm_bindgen_test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[wasm_bindgen_test]
    fn from_status_prefers_server_message() {
        let error = ApiError::from_status(400, Some(json!({ "error": "Current password is wrong" })));
        assert_eq!(error.error, "Current password is wrong");
        assert_eq!(error.code, CODE_BAD_REQUEST);

        let detail = ApiError::from_status(403, Some(json!({ "detail": "Not allowed" })));
        assert_eq!(detail.error, "Not allowed");
        assert_eq!(detail.code, CODE_REQUEST_FAILED);
    }

    #[wasm_bindgen_test]
    fn from_status_falls_back_to_fixed_messages() {
        let bad = ApiError::from_status(400, Some(json!({ "start_date": ["required"] })));
        assert_eq!(bad.error, "Invalid data. Please check your input.");
        assert!(bad.details.is_some());

        let server = ApiError::from_status(502, None);
        assert_eq!(server.code, CODE_SERVER_ERROR);
        assert_eq!(server.error, "Server error. Please try again later.");
    }

    #[wasm_bindgen_test]
    fn list_payload_accepts_plain_and_paged_lists() {
        let plain: ListPayload<Employee> =
            serde_json::from_value(json!([{ "id": 1, "first_name": "A", "last_name": "B" }]))
                .unwrap();
        assert_eq!(plain.into_items().len(), 1);

        let paged: ListPayload<Employee> = serde_json::from_value(json!({
            "count": 1,
            "results": [{ "id": 2, "first_name": "C", "last_name": "D" }]
        }))
        .unwrap();
        assert_eq!(paged.into_items()[0].id, 2);
    }

    #[wasm_bindgen_test]
    fn leave_type_uses_wire_labels() {
        assert_eq!(serde_json::to_value(LeaveType::Personal).unwrap(), json!("Personal Leave"));
        assert_eq!(LeaveType::parse("Emergency Leave"), Some(LeaveType::Emergency));
        assert_eq!(LeaveType::parse("annual"), None);
        assert_eq!(LeaveType::ALL.len(), 9);
    }

    #[wasm_bindgen_test]
    fn leave_status_keeps_unknown_values() {
        let status: LeaveStatus = serde_json::from_value(json!("Cancelled")).unwrap();
        assert_eq!(status, LeaveStatus::Other("Cancelled".into()));
        assert_eq!(status.as_str(), "Cancelled");
        let pending: LeaveStatus = serde_json::from_value(json!("Pending")).unwrap();
        assert!(pending.is_pending());
    }

    #[wasm_bindgen_test]
    fn leave_record_accepts_nested_or_bare_employee() {
        let nested: LeaveRecord = serde_json::from_value(json!({
            "id": 1,
            "employee": { "id": 7, "first_name": "Ada", "last_name": "Lovelace" },
            "leave_type": "Sick",
            "start_date": "2024-01-01",
            "end_date": "2024-01-03",
            "days_taken": "3.00",
            "reason": "flu",
            "status": "Approved",
            "applied_on": "2023-12-30T09:00:00Z",
            "approved_on": null,
            "approved_by": { "first_name": "Grace", "last_name": "Hopper" }
        }))
        .unwrap();
        assert_eq!(nested.days_taken, 3.0);
        assert_eq!(nested.employee_name(), "Ada Lovelace");
        assert_eq!(nested.approver_name(), "Grace Hopper");

        let bare: LeaveRecord = serde_json::from_value(json!({
            "id": 2,
            "employee": 7,
            "leave_type": "Annual",
            "start_date": "2024-02-01",
            "end_date": "2024-02-01",
            "days_taken": 1,
            "status": "Pending"
        }))
        .unwrap();
        assert_eq!(bare.employee_name(), "#7");
        assert_eq!(bare.approver_name(), "-");
    }

    #[wasm_bindgen_test]
    fn leave_balance_reads_decimal_strings_and_alias() {
        let balance: LeaveBalance = serde_json::from_value(json!({
            "id": 3,
            "employee": 7,
            "employee_details": { "first_name": "Ada", "last_name": "Lovelace" },
            "annual_leave_balance": "21.00",
            "sick_leave_balance": "10.00",
            "maternity_leave_balance": "0.00",
            "paternity_leave_balance": "0.00",
            "compassionate_leave_balance": "5.00",
            "unpaid_leave_balance": "0.00",
            "personal_leave_balance": "5.00",
            "emergency_leave_balance": "5.00",
            "others_leave_balance": "2.50"
        }))
        .unwrap();
        assert_eq!(balance.counters.annual_leave_balance, 21.0);
        assert_eq!(balance.counters.other_leave_balance, 2.5);
        assert_eq!(balance.employee_name(&[]), "Ada Lovelace");
        assert_eq!(balance.employee_id(), Some(7));
    }

    #[wasm_bindgen_test]
    fn leave_balance_name_falls_back_to_employee_list() {
        let balance = LeaveBalance {
            id: 1,
            employee: EmployeeLink::Id(9),
            employee_details: None,
            counters: LeaveCounters::default(),
        };
        let employees = vec![Employee {
            id: 9,
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            email: None,
        }];
        assert_eq!(balance.employee_name(&employees), "Alan Turing");
        assert_eq!(balance.employee_name(&[]), "#9");
    }

    #[wasm_bindgen_test]
    fn leave_balance_payload_flattens_counters() {
        let payload = LeaveBalancePayload {
            employee: 4,
            counters: LeaveCounters::from_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["employee"], json!(4));
        assert_eq!(value["annual_leave_balance"], json!(1.0));
        assert_eq!(value["other_leave_balance"], json!(9.0));
    }

    #[wasm_bindgen_test]
    fn salary_total_falls_back_to_sum_of_components() {
        let details: SalaryDetails = serde_json::from_value(json!({
            "basic_salary": "1000.00",
            "housing_allowance": "200.00",
            "transport_allowance": 50,
            "other_allowance": "0",
            "bank_name": "Example Bank"
        }))
        .unwrap();
        assert_eq!(details.total(), 1250.0);

        let explicit = SalaryDetails {
            total_salary: Some(2000.0),
            ..details
        };
        assert_eq!(explicit.total(), 2000.0);
    }
}
