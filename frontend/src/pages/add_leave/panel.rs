use crate::components::layout::PageHeader;
use crate::pages::add_leave::{components::form::AddLeaveForm, view_model::use_add_leave_view_model};
use leptos::*;

#[component]
pub fn AddLeavePage() -> impl IntoView {
    let vm = use_add_leave_view_model();
    let on_submit = Callback::new(move |_| vm.submit());

    view! {
        <div class="space-y-6">
            <PageHeader title="Add employee leave" />
            <AddLeaveForm
                state=vm.form
                employees=vm.employees
                message=vm.message
                days_taken=vm.days_taken
                pending=vm.submit_action.pending()
                on_submit=on_submit
            />
        </div>
    }
}
