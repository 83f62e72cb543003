#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Employee, LeaveCounters, PayrollRecord};
    use crate::state::auth::AuthState;
    use crate::state::session::{Role, Session};
    use leptos::*;

    pub fn session_for(role: Role) -> Session {
        Session {
            token: "test-token".into(),
            refresh_token: Some("test-refresh".into()),
            role,
        }
    }

    /// Provides the auth context; `None` renders as signed out.
    pub fn provide_auth(role: Option<Role>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            session: role.map(session_for),
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    /// Stores a token so authorized requests go out.
    pub fn sign_in_storage() {
        crate::utils::storage::set_item(crate::state::session::TOKEN_KEY, "test-token").ok();
    }

    pub fn employee(id: i64, first_name: &str, last_name: &str) -> Employee {
        Employee {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
        }
    }

    pub fn counters(annual: f64, sick: f64) -> LeaveCounters {
        LeaveCounters {
            annual_leave_balance: annual,
            sick_leave_balance: sick,
            ..LeaveCounters::default()
        }
    }

    pub fn payslip(id: i64, month: &str, year: i32) -> PayrollRecord {
        PayrollRecord {
            id,
            month: month.into(),
            year,
            total_salary_for_month: 5000.0,
            overtime_days: 0.0,
            unpaid_days: 0.0,
            other_deductions: 0.0,
            remarks: None,
        }
    }
}
