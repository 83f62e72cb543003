use crate::components::{
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
};
use crate::pages::leave_summary::{
    components::tables::{EmployeeSummaryTable, LeaveTypeSummaryTable},
    view_model::{use_leave_summary_view_model, SummaryScope},
};
use leptos::*;

#[component]
pub fn AdminLeaveSummaryPage() -> impl IntoView {
    let vm = use_leave_summary_view_model(SummaryScope::AllEmployees);

    view! {
        <div class="space-y-4">
            <PageHeader
                title="Leave summary"
                description=format!("Approved leave per employee for {}.", vm.year)
            />
            <InlineErrorMessage error=vm.load_error />
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <EmployeeSummaryTable rows=vm.by_employee />
            </Show>
        </div>
    }
}

#[component]
pub fn MyLeaveSummaryPage() -> impl IntoView {
    let vm = use_leave_summary_view_model(SummaryScope::Mine);

    view! {
        <div class="space-y-4">
            <PageHeader
                title="My leave summary"
                description=format!("Approved leave by type for {}.", vm.year)
            />
            <InlineErrorMessage error=vm.load_error />
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <LeaveTypeSummaryTable totals=vm.by_type />
            </Show>
        </div>
    }
}
