use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let on_submit = Callback::new(move |_| vm.submit());

    view! {
        <LoginForm
            state=vm.form
            error=vm.error
            pending=pending
            on_submit=on_submit
        />
    }
}
