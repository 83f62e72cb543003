use crate::api::LeaveBalance;
use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
    messages::MessageBanner,
};
use crate::pages::leave_balances::{
    components::{cards::LeaveBalanceCards, form_modal::LeaveBalanceFormModal, table::LeaveBalanceTable},
    view_model::{use_leave_balances_view_model, use_my_leave_balance_view_model},
};
use leptos::*;

#[component]
pub fn LeaveBalancesPage() -> impl IntoView {
    let vm = use_leave_balances_view_model();
    let pending = vm.save_action.pending();

    view! {
        <div class="space-y-4">
            <div class="flex items-start justify-between">
                <PageHeader title="Leave balances" description="Remaining leave per employee and category." />
                <button
                    class="px-4 py-2 rounded bg-blue-600 text-white"
                    on:click=move |_| vm.open_create()
                >
                    {"Add balance"}
                </button>
            </div>
            <MessageBanner message=vm.message />
            <InlineErrorMessage error=vm.load_error />
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <LeaveBalanceTable
                    balances=vm.balances
                    employees=vm.employees
                    on_edit=Callback::new(move |balance: LeaveBalance| vm.open_edit(&balance))
                />
            </Show>
            <LeaveBalanceFormModal
                state=vm.form
                editor=vm.editor
                employees=vm.employees
                error=vm.form_error
                pending=pending
                on_submit=Callback::new(move |_| vm.submit())
                on_close=Callback::new(move |_| vm.close())
            />
        </div>
    }
}

#[component]
pub fn MyLeaveBalancePage() -> impl IntoView {
    let vm = use_my_leave_balance_view_model();

    view! {
        <div class="space-y-4">
            <PageHeader title="My leave balance" />
            <InlineErrorMessage error=vm.load_error />
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                {move || match vm.balance.get() {
                    Some(balance) => view! { <LeaveBalanceCards counters=balance.counters /> }.into_view(),
                    None => view! {
                        <EmptyState
                            title="No leave balance on record"
                            description="Contact HR if you expected to see your balance here."
                        />
                    }
                    .into_view(),
                }}
            </Show>
        </div>
    }
}
