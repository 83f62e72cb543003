use crate::components::messages::{MessageBanner, MessageState};
use crate::pages::change_password::utils::PasswordFormState;
use leptos::*;

#[component]
fn PasswordField(id: &'static str, label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                type="password"
                class="mt-1 block w-full border rounded px-2 py-1"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn ChangePasswordForm(
    state: PasswordFormState,
    #[prop(into)] message: Signal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4 max-w-lg">
            <MessageBanner message=message />
            <form
                class="space-y-4"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <PasswordField id="current-password" label="Current password" value=state.current_password />
                <PasswordField id="new-password" label="New password" value=state.new_password />
                <PasswordField id="confirm-password" label="Confirm new password" value=state.confirm_password />
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Updating..." } else { "Change password" }}
                </button>
            </form>
        </div>
    }
}
