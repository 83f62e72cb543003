use crate::api::LeaveRecord;
use crate::router;

pub fn pending_count(records: &[LeaveRecord]) -> usize {
    records.iter().filter(|record| record.status.is_pending()).count()
}

pub const ADMIN_QUICK_LINKS: &[(&str, &str, &str)] = &[
    (router::LEAVE_REQUESTS_PATH, "Leave requests", "Review pending applications"),
    (router::LEAVE_BALANCES_PATH, "Leave balances", "Create or adjust balances"),
    (router::LEAVE_SUMMARY_PATH, "Leave summary", "Approved leave this year"),
    (router::ADD_LEAVE_PATH, "Add leave", "Record leave for an employee"),
];

pub const EMPLOYEE_QUICK_LINKS: &[(&str, &str, &str)] = &[
    (router::APPLY_LEAVE_PATH, "Apply for leave", "Submit a new application"),
    (router::MY_LEAVE_REQUESTS_PATH, "My leave requests", "Track your applications"),
    (router::PAYSLIPS_PATH, "Payslips", "Download monthly salary slips"),
    (router::SALARY_DETAILS_PATH, "Salary details", "Pay and bank information"),
];
