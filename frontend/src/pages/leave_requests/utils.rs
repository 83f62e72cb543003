use crate::api::{LeaveDecision, LeaveRecord, LeaveStatus};

pub fn status_badge_class(status: &LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Approved => "bg-green-100 text-green-800",
        LeaveStatus::Rejected => "bg-red-100 text-red-800",
        _ => "bg-blue-100 text-blue-800",
    }
}

/// Approve and reject only apply to requests still waiting for a decision.
pub fn can_review(record: &LeaveRecord) -> bool {
    record.status.is_pending()
}

/// Swaps in the server's copy of a reviewed record, keeping list order.
pub fn replace_leave(records: &mut [LeaveRecord], updated: LeaveRecord) -> bool {
    match records.iter_mut().find(|record| record.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

pub fn decision_copy(decision: LeaveDecision) -> (&'static str, &'static str) {
    match decision {
        LeaveDecision::Approve => (
            "Approve leave request",
            "Approve this leave request? The employee's balance will be updated.",
        ),
        LeaveDecision::Reject => ("Reject leave request", "Reject this leave request?"),
    }
}

pub fn decision_success(decision: LeaveDecision) -> &'static str {
    match decision {
        LeaveDecision::Approve => "Leave request approved.",
        LeaveDecision::Reject => "Leave request rejected.",
    }
}
