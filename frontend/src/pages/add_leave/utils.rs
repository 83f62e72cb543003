use crate::api::{AddLeaveRequest, ApiError, LeaveType};
use crate::pages::leave_apply::utils::REQUIRED_FIELDS_MESSAGE;
use crate::utils::time;
use leptos::*;

pub const RECORDED_MESSAGE: &str = "Leave application submitted successfully. If rejected, it might be due to insufficient leave balance.";
pub const RECORDED_MESSAGE_MS: u32 = 9_000;

#[derive(Clone, Copy)]
pub struct AddLeaveFormState {
    pub employee: RwSignal<String>,
    pub leave_type: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub reason: RwSignal<String>,
    pub remarks: RwSignal<String>,
}

impl Default for AddLeaveFormState {
    fn default() -> Self {
        Self {
            employee: create_rw_signal(String::new()),
            leave_type: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
            remarks: create_rw_signal(String::new()),
        }
    }
}

impl AddLeaveFormState {
    pub fn reset(&self) {
        for field in [
            self.employee,
            self.leave_type,
            self.start_date,
            self.end_date,
            self.reason,
            self.remarks,
        ] {
            field.set(String::new());
        }
    }

    pub fn days_taken(&self) -> u32 {
        self.start_date
            .with(|start| self.end_date.with(|end| time::days_taken_between(start, end)))
    }

    pub fn to_payload(&self) -> Result<AddLeaveRequest, ApiError> {
        build_payload(&AddLeaveInput {
            employee: self.employee.get_untracked(),
            leave_type: self.leave_type.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            reason: self.reason.get_untracked(),
            remarks: self.remarks.get_untracked(),
        })
    }
}

/// Raw form values as typed.
#[derive(Debug, Clone, Default)]
pub struct AddLeaveInput {
    pub employee: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub remarks: String,
}

/// Every field is required. Dates in the past are allowed here; an end
/// before the start yields zero days and is left to the server.
pub fn build_payload(input: &AddLeaveInput) -> Result<AddLeaveRequest, ApiError> {
    let required = [
        &input.employee,
        &input.leave_type,
        &input.start_date,
        &input.end_date,
        &input.reason,
        &input.remarks,
    ];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
    }
    let employee = input
        .employee
        .trim()
        .parse::<i64>()
        .map_err(|_| ApiError::validation("Select an employee from the list."))?;
    let leave_type = LeaveType::parse(&input.leave_type)
        .ok_or_else(|| ApiError::validation(format!("Unknown leave type: {}", input.leave_type)))?;
    let start_date = time::parse_date(&input.start_date)
        .ok_or_else(|| ApiError::validation("Start date must be a valid date."))?;
    let end_date = time::parse_date(&input.end_date)
        .ok_or_else(|| ApiError::validation("End date must be a valid date."))?;
    Ok(AddLeaveRequest {
        employee,
        leave_type,
        start_date,
        end_date,
        reason: input.reason.trim().to_string(),
        days_taken: time::days_taken(start_date, end_date),
        remarks: input.remarks.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn complete() -> AddLeaveInput {
        AddLeaveInput {
            employee: "7".into(),
            leave_type: "Compassionate".into(),
            start_date: "2024-04-08".into(),
            end_date: "2024-04-10".into(),
            reason: " Bereavement ".into(),
            remarks: "Approved by phone".into(),
        }
    }

    #[test]
    fn each_missing_field_is_reported_as_required() {
        let blankers: [fn(&mut AddLeaveInput); 6] = [
            |i| i.employee.clear(),
            |i| i.leave_type.clear(),
            |i| i.start_date.clear(),
            |i| i.end_date.clear(),
            |i| i.reason = "  ".into(),
            |i| i.remarks.clear(),
        ];
        for blank in blankers {
            let mut input = complete();
            blank(&mut input);
            let err = build_payload(&input).unwrap_err();
            assert_eq!(err.error, REQUIRED_FIELDS_MESSAGE);
            assert!(err.is_validation());
        }
    }

    #[test]
    fn complete_input_builds_payload_with_inclusive_days() {
        let payload = build_payload(&complete()).unwrap();
        assert_eq!(payload.employee, 7);
        assert_eq!(payload.leave_type, LeaveType::Compassionate);
        assert_eq!(payload.start_date, NaiveDate::from_ymd_opt(2024, 4, 8).unwrap());
        assert_eq!(payload.days_taken, 3);
        assert_eq!(payload.reason, "Bereavement");
        assert_eq!(payload.remarks, "Approved by phone");
    }

    #[test]
    fn past_dates_are_accepted_and_reversed_range_counts_zero_days() {
        let mut input = complete();
        input.start_date = "2020-01-10".into();
        input.end_date = "2020-01-05".into();
        let payload = build_payload(&input).unwrap();
        assert_eq!(payload.days_taken, 0);
    }

    #[test]
    fn non_numeric_employee_is_rejected() {
        let mut input = complete();
        input.employee = "abc".into();
        assert!(build_payload(&input).unwrap_err().is_validation());
    }
}
