use crate::components::{
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner, PageHeader},
};
use crate::pages::dashboard::{
    components::{Metric, QuickLinks, SectionCard},
    utils::{ADMIN_QUICK_LINKS, EMPLOYEE_QUICK_LINKS},
    view_model::{use_admin_dashboard_view_model, use_employee_dashboard_view_model},
};
use crate::pages::leave_balances::components::cards::LeaveBalanceCards;
use crate::pages::leave_summary::components::tables::{EmployeeSummaryTable, LeaveTypeSummaryTable};
use leptos::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let vm = use_admin_dashboard_view_model();

    view! {
        <div class="space-y-6">
            <PageHeader title="Admin dashboard" />
            <QuickLinks links=ADMIN_QUICK_LINKS />
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <Suspense fallback=|| view! { <LoadingSpinner /> }>
                    {move || vm.pending.get().map(|result| match result {
                        Ok(count) => view! { <Metric label="Pending leave requests" value=count.to_string() /> }.into_view(),
                        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    })}
                </Suspense>
                <div class="lg:col-span-2">
                    <SectionCard title="Leave summary" subtitle=format!("Approved leave in {}", vm.year)>
                        <Suspense fallback=|| view! { <LoadingSpinner /> }>
                            {move || vm.summary.get().map(|result| match result {
                                Ok(rows) => view! { <EmployeeSummaryTable rows=Signal::derive(move || rows.clone()) /> }.into_view(),
                                Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            })}
                        </Suspense>
                    </SectionCard>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let vm = use_employee_dashboard_view_model();

    view! {
        <div class="space-y-6">
            <PageHeader title="My dashboard" />
            <QuickLinks links=EMPLOYEE_QUICK_LINKS />
            <SectionCard title="Leave balance">
                <Suspense fallback=|| view! { <LoadingSpinner /> }>
                    {move || vm.balance.get().map(|result| match result {
                        Ok(Some(balance)) => view! { <LeaveBalanceCards counters=balance.counters /> }.into_view(),
                        Ok(None) => view! { <EmptyState title="No leave balance on record" /> }.into_view(),
                        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    })}
                </Suspense>
            </SectionCard>
            <SectionCard title="Leave taken" subtitle=format!("Approved leave by type in {}", vm.year)>
                <Suspense fallback=|| view! { <LoadingSpinner /> }>
                    {move || vm.summary.get().map(|result| match result {
                        Ok(totals) => view! { <LeaveTypeSummaryTable totals=Signal::derive(move || totals.clone()) /> }.into_view(),
                        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    })}
                </Suspense>
            </SectionCard>
        </div>
    }
}
