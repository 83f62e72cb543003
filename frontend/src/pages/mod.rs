pub mod add_leave;
pub mod change_password;
pub mod dashboard;
pub mod leave_apply;
pub mod leave_balances;
pub mod leave_requests;
pub mod leave_summary;
pub mod login;
pub mod payslips;
pub mod salary_details;
