use crate::components::layout::PageHeader;
use crate::pages::leave_apply::{
    components::form::LeaveApplicationForm, view_model::use_leave_application_view_model,
};
use leptos::*;

#[component]
pub fn LeaveApplicationPage() -> impl IntoView {
    let vm = use_leave_application_view_model();
    let pending = vm.submit_action.pending();
    let on_submit = Callback::new(move |_| vm.submit());

    view! {
        <div class="space-y-6">
            <PageHeader title="Apply for leave" />
            <LeaveApplicationForm
                state=vm.form
                message=vm.message
                days_taken=vm.days_taken
                pending=pending
                on_submit=on_submit
            />
        </div>
    }
}
