use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        error_boundary::AppErrorBoundary,
        guard::{RequireAdmin, RequireAuth, RequireEmployee},
        layout::{Layout, LoadingSpinner},
    },
    pages::{
        add_leave::AddLeavePage,
        change_password::ChangePasswordPage,
        dashboard::{AdminDashboardPage, EmployeeDashboardPage},
        leave_apply::LeaveApplicationPage,
        leave_balances::{LeaveBalancesPage, MyLeaveBalancePage},
        leave_requests::{AdminLeaveRequestsPage, MyLeaveRequestsPage},
        leave_summary::{AdminLeaveSummaryPage, MyLeaveSummaryPage},
        login::LoginPage,
        payslips::PayslipsPage,
        salary_details::SalaryDetailsPage,
    },
    state::{
        auth::{use_auth, AuthProvider},
        theme::provide_theme,
    },
};

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_DASHBOARD_PATH: &str = "/dashboard";
pub const EMPLOYEE_DASHBOARD_PATH: &str = "/employee-dashboard";
pub const APPLY_LEAVE_PATH: &str = "/leaves/apply";
pub const MY_LEAVE_REQUESTS_PATH: &str = "/leaves/my-requests";
pub const MY_LEAVE_BALANCE_PATH: &str = "/leaves/my-balance";
pub const MY_LEAVE_SUMMARY_PATH: &str = "/leaves/my-summary";
pub const LEAVE_REQUESTS_PATH: &str = "/leaves/requests";
pub const LEAVE_BALANCES_PATH: &str = "/leaves/balances";
pub const LEAVE_SUMMARY_PATH: &str = "/leaves/summary";
pub const ADD_LEAVE_PATH: &str = "/leaves/add";
pub const PAYSLIPS_PATH: &str = "/payslips";
pub const SALARY_DETAILS_PATH: &str = "/profile/salary-details";
pub const CHANGE_PASSWORD_PATH: &str = "/change-password";

pub const ROUTE_PATHS: &[&str] = &[
    ROOT_PATH,
    LOGIN_PATH,
    ADMIN_DASHBOARD_PATH,
    EMPLOYEE_DASHBOARD_PATH,
    APPLY_LEAVE_PATH,
    MY_LEAVE_REQUESTS_PATH,
    MY_LEAVE_BALANCE_PATH,
    MY_LEAVE_SUMMARY_PATH,
    LEAVE_REQUESTS_PATH,
    LEAVE_BALANCES_PATH,
    LEAVE_SUMMARY_PATH,
    ADD_LEAVE_PATH,
    PAYSLIPS_PATH,
    SALARY_DETAILS_PATH,
    CHANGE_PASSWORD_PATH,
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    ADMIN_DASHBOARD_PATH,
    LEAVE_REQUESTS_PATH,
    LEAVE_BALANCES_PATH,
    LEAVE_SUMMARY_PATH,
    ADD_LEAVE_PATH,
];

pub const EMPLOYEE_ROUTE_PATHS: &[&str] = &[
    EMPLOYEE_DASHBOARD_PATH,
    APPLY_LEAVE_PATH,
    MY_LEAVE_REQUESTS_PATH,
    MY_LEAVE_BALANCE_PATH,
    MY_LEAVE_SUMMARY_PATH,
    PAYSLIPS_PATH,
    SALARY_DETAILS_PATH,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    ADMIN_DASHBOARD_PATH,
    EMPLOYEE_DASHBOARD_PATH,
    APPLY_LEAVE_PATH,
    MY_LEAVE_REQUESTS_PATH,
    MY_LEAVE_BALANCE_PATH,
    MY_LEAVE_SUMMARY_PATH,
    LEAVE_REQUESTS_PATH,
    LEAVE_BALANCES_PATH,
    LEAVE_SUMMARY_PATH,
    ADD_LEAVE_PATH,
    PAYSLIPS_PATH,
    SALARY_DETAILS_PATH,
    CHANGE_PASSWORD_PATH,
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[ROOT_PATH, LOGIN_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    provide_theme();
    view! {
        <Title text="HR Portal"/>
        <AuthProvider>
            <AppErrorBoundary>
                <Router>
                    <Suspense fallback=|| view! { <LoadingSpinner/> }>
                        <Routes>
                            <Route path=ROOT_PATH view=RootRedirect/>
                            <Route path=LOGIN_PATH view=LoginPage/>

                            <Route path=ADMIN_DASHBOARD_PATH view=|| view! {
                                <RequireAdmin><Layout><AdminDashboardPage/></Layout></RequireAdmin>
                            }/>
                            <Route path=LEAVE_REQUESTS_PATH view=|| view! {
                                <RequireAdmin><Layout><AdminLeaveRequestsPage/></Layout></RequireAdmin>
                            }/>
                            <Route path=LEAVE_BALANCES_PATH view=|| view! {
                                <RequireAdmin><Layout><LeaveBalancesPage/></Layout></RequireAdmin>
                            }/>
                            <Route path=LEAVE_SUMMARY_PATH view=|| view! {
                                <RequireAdmin><Layout><AdminLeaveSummaryPage/></Layout></RequireAdmin>
                            }/>
                            <Route path=ADD_LEAVE_PATH view=|| view! {
                                <RequireAdmin><Layout><AddLeavePage/></Layout></RequireAdmin>
                            }/>

                            <Route path=EMPLOYEE_DASHBOARD_PATH view=|| view! {
                                <RequireEmployee><Layout><EmployeeDashboardPage/></Layout></RequireEmployee>
                            }/>
                            <Route path=APPLY_LEAVE_PATH view=|| view! {
                                <RequireEmployee><Layout><LeaveApplicationPage/></Layout></RequireEmployee>
                            }/>
                            <Route path=MY_LEAVE_REQUESTS_PATH view=|| view! {
                                <RequireEmployee><Layout><MyLeaveRequestsPage/></Layout></RequireEmployee>
                            }/>
                            <Route path=MY_LEAVE_BALANCE_PATH view=|| view! {
                                <RequireEmployee><Layout><MyLeaveBalancePage/></Layout></RequireEmployee>
                            }/>
                            <Route path=MY_LEAVE_SUMMARY_PATH view=|| view! {
                                <RequireEmployee><Layout><MyLeaveSummaryPage/></Layout></RequireEmployee>
                            }/>
                            <Route path=PAYSLIPS_PATH view=|| view! {
                                <RequireEmployee><Layout><PayslipsPage/></Layout></RequireEmployee>
                            }/>
                            <Route path=SALARY_DETAILS_PATH view=|| view! {
                                <RequireEmployee><Layout><SalaryDetailsPage/></Layout></RequireEmployee>
                            }/>

                            <Route path=CHANGE_PASSWORD_PATH view=|| view! {
                                <RequireAuth><Layout><ChangePasswordPage/></Layout></RequireAuth>
                            }/>
                            <Route path="/*any" view=CatchAll/>
                        </Routes>
                    </Suspense>
                </Router>
            </AppErrorBoundary>
        </AuthProvider>
    }
}

/// `/` carries no view of its own.
#[component]
fn RootRedirect() -> impl IntoView {
    let (auth, _) = use_auth();
    let target = auth.with_untracked(|state| state.home_path());
    view! { <Redirect path=target/> }
}

#[component]
fn CatchAll() -> impl IntoView {
    let (auth, _) = use_auth();
    let target = fallback_target(auth.with_untracked(|state| state.is_authenticated()));
    view! { <Redirect path=target/> }
}

fn fallback_target(authenticated: bool) -> &'static str {
    if authenticated {
        ROOT_PATH
    } else {
        LOGIN_PATH
    }
}
