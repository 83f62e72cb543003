use super::{
    repository::LeaveSummaryRepository,
    utils::{summarize_by_employee, summarize_by_type, EmployeeLeaveSummary},
};
use crate::api::{ApiClient, ApiError, LeaveRecord};
use crate::utils::time;
use leptos::*;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryScope {
    AllEmployees,
    Mine,
}

#[derive(Clone, Copy)]
pub struct LeaveSummaryViewModel {
    pub year: i32,
    pub loading: Signal<bool>,
    pub load_error: Signal<Option<ApiError>>,
    pub records: Signal<Vec<LeaveRecord>>,
    pub by_employee: Memo<Vec<EmployeeLeaveSummary>>,
    pub by_type: Memo<BTreeMap<String, f64>>,
}

pub fn use_leave_summary_view_model(scope: SummaryScope) -> LeaveSummaryViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(LeaveSummaryRepository::new_with_client(Rc::new(api)));
    let year = time::current_year();

    let resource = create_resource(
        move || scope,
        move |scope| {
            let repo = repository.get_value();
            async move {
                match scope {
                    SummaryScope::AllEmployees => repo.all_records().await,
                    SummaryScope::Mine => repo.my_records().await,
                }
            }
        },
    );
    let records = Signal::derive(move || {
        resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let by_employee = create_memo(move |_| records.with(|rows| summarize_by_employee(rows, year)));
    let by_type = create_memo(move |_| records.with(|rows| summarize_by_type(rows, year)));

    LeaveSummaryViewModel {
        year,
        loading: resource.loading(),
        load_error: Signal::derive(move || resource.get().and_then(Result::err)),
        records,
        by_employee,
        by_type,
    }
}
