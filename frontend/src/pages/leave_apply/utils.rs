use crate::api::{ApiError, CreateLeaveRequest, LeaveType, CODE_BAD_REQUEST, CODE_SERVER_ERROR};
use crate::utils::time;
use chrono::NaiveDate;
use leptos::*;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const START_IN_PAST_MESSAGE: &str = "Start date cannot be in the past.";
pub const END_BEFORE_START_MESSAGE: &str = "End date cannot be before the start date.";
pub const SUBMITTED_MESSAGE: &str = "Leave application submitted successfully.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit leave application. Please try again.";

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    pub leave_type: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn reset(&self) {
        self.leave_type.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    /// Live inclusive day count for the dates currently entered.
    pub fn days_taken(&self) -> u32 {
        self.start_date
            .with(|start| self.end_date.with(|end| time::days_taken_between(start, end)))
    }

    pub fn to_payload(&self, today: NaiveDate) -> Result<CreateLeaveRequest, ApiError> {
        build_payload(
            &self.leave_type.get_untracked(),
            &self.start_date.get_untracked(),
            &self.end_date.get_untracked(),
            &self.reason.get_untracked(),
            today,
        )
    }
}

pub fn build_payload(
    leave_type: &str,
    start_date: &str,
    end_date: &str,
    reason: &str,
    today: NaiveDate,
) -> Result<CreateLeaveRequest, ApiError> {
    let reason = reason.trim();
    if [leave_type, start_date, end_date, reason]
        .iter()
        .any(|value| value.trim().is_empty())
    {
        return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
    }
    let leave_type = LeaveType::parse(leave_type)
        .ok_or_else(|| ApiError::validation(format!("Unknown leave type: {}", leave_type)))?;
    let start = time::parse_date(start_date)
        .ok_or_else(|| ApiError::validation("Start date must be a valid date."))?;
    let end = time::parse_date(end_date)
        .ok_or_else(|| ApiError::validation("End date must be a valid date."))?;
    if start < today {
        return Err(ApiError::validation(START_IN_PAST_MESSAGE));
    }
    if end < start {
        return Err(ApiError::validation(END_BEFORE_START_MESSAGE));
    }
    Ok(CreateLeaveRequest {
        leave_type,
        start_date: start,
        end_date: end,
        reason: reason.to_string(),
        days_taken: time::days_taken(start, end),
    })
}

/// Text shown for a failed submission.
pub fn submission_error(err: ApiError) -> ApiError {
    match err.code.as_str() {
        CODE_BAD_REQUEST => ApiError {
            error: "Invalid data. Please check your input.".into(),
            ..err
        },
        CODE_SERVER_ERROR => ApiError {
            error: "Server error. Please try again later.".into(),
            ..err
        },
        _ if err.is_validation() || err.is_unauthorized() => err,
        _ => ApiError {
            error: GENERIC_FAILURE_MESSAGE.into(),
            ..err
        },
    }
}
