use super::{repository::DashboardRepository, utils::pending_count};
use crate::api::{ApiClient, ApiError, LeaveBalance};
use crate::pages::leave_summary::utils::{summarize_by_employee, summarize_by_type, EmployeeLeaveSummary};
use crate::utils::time;
use leptos::*;
use std::collections::BTreeMap;
use std::rc::Rc;

fn use_repository() -> StoredValue<DashboardRepository> {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    store_value(DashboardRepository::new_with_client(Rc::new(api)))
}

#[derive(Clone, Copy)]
pub struct AdminDashboardViewModel {
    pub year: i32,
    pub pending: Resource<(), Result<usize, ApiError>>,
    pub summary: Resource<(), Result<Vec<EmployeeLeaveSummary>, ApiError>>,
}

pub fn use_admin_dashboard_view_model() -> AdminDashboardViewModel {
    let repository = use_repository();
    let year = time::current_year();

    let pending = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.all_leaves().await.map(|leaves| pending_count(&leaves)) }
        },
    );
    let summary = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move {
                repo.summary_records()
                    .await
                    .map(|records| summarize_by_employee(&records, year))
            }
        },
    );

    AdminDashboardViewModel {
        year,
        pending,
        summary,
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeDashboardViewModel {
    pub year: i32,
    pub balance: Resource<(), Result<Option<LeaveBalance>, ApiError>>,
    pub summary: Resource<(), Result<BTreeMap<String, f64>, ApiError>>,
}

pub fn use_employee_dashboard_view_model() -> EmployeeDashboardViewModel {
    let repository = use_repository();
    let year = time::current_year();

    let balance = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.my_balance().await }
        },
    );
    let summary = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move {
                repo.my_approved_leaves()
                    .await
                    .map(|records| summarize_by_type(&records, year))
            }
        },
    );

    EmployeeDashboardViewModel {
        year,
        balance,
        summary,
    }
}
