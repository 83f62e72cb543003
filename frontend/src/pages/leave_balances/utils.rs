use crate::api::{ApiError, LeaveBalance, LeaveBalancePayload, LeaveCounters};
use leptos::*;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Which balance the modal is editing, if it is open at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceEditor {
    Closed,
    Create,
    Edit(i64),
}

impl BalanceEditor {
    pub fn is_open(&self) -> bool {
        !matches!(self, BalanceEditor::Closed)
    }

    pub fn record_id(&self) -> Option<i64> {
        match self {
            BalanceEditor::Edit(id) => Some(*id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BalanceEditor::Edit(_) => "Edit leave balance",
            _ => "Add leave balance",
        }
    }
}

#[derive(Clone, Copy)]
pub struct LeaveBalanceFormState {
    pub employee: RwSignal<String>,
    pub counters: [RwSignal<String>; 9],
}

impl Default for LeaveBalanceFormState {
    fn default() -> Self {
        Self {
            employee: create_rw_signal(String::new()),
            counters: std::array::from_fn(|_| create_rw_signal(String::new())),
        }
    }
}

impl LeaveBalanceFormState {
    pub fn reset(&self) {
        self.employee.set(String::new());
        for field in self.counters {
            field.set(String::new());
        }
    }

    pub fn load(&self, balance: &LeaveBalance) {
        self.employee.set(
            balance
                .employee_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        for (field, value) in self.counters.iter().zip(balance.counters.values()) {
            field.set(value.to_string());
        }
    }

    pub fn to_payload(&self) -> Result<LeaveBalancePayload, ApiError> {
        let raw: [String; 9] = std::array::from_fn(|i| self.counters[i].get_untracked());
        build_payload(&self.employee.get_untracked(), &raw)
    }
}

pub fn build_payload(employee: &str, raw: &[String; 9]) -> Result<LeaveBalancePayload, ApiError> {
    if employee.trim().is_empty() || raw.iter().any(|value| value.trim().is_empty()) {
        return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
    }
    let employee = employee
        .trim()
        .parse::<i64>()
        .map_err(|_| ApiError::validation("Select an employee."))?;
    let mut values = [0.0; 9];
    for ((slot, text), (_, label)) in values.iter_mut().zip(raw).zip(LeaveCounters::FIELDS) {
        let value = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ApiError::validation(format!("{} balance must be a number.", label)))?;
        if value < 0.0 {
            return Err(ApiError::validation(format!(
                "{} balance cannot be negative.",
                label
            )));
        }
        *slot = value;
    }
    Ok(LeaveBalancePayload {
        employee,
        counters: LeaveCounters::from_values(values),
    })
}
