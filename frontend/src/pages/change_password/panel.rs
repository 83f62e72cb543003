use crate::components::layout::PageHeader;
use crate::pages::change_password::{
    components::form::ChangePasswordForm, view_model::use_change_password_view_model,
};
use leptos::*;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let vm = use_change_password_view_model();
    let pending = vm.action.pending();

    view! {
        <div class="space-y-4">
            <PageHeader title="Change password" />
            <ChangePasswordForm
                state=vm.form
                message=vm.message
                pending=pending
                on_submit=Callback::new(move |_| vm.submit())
            />
        </div>
    }
}
