use crate::api::LeaveType;
use crate::components::messages::{MessageBanner, MessageState};
use crate::pages::leave_apply::utils::LeaveFormState;
use leptos::*;

#[component]
pub fn LeaveApplicationForm(
    state: LeaveFormState,
    #[prop(into)] message: Signal<MessageState>,
    #[prop(into)] days_taken: Signal<u32>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let leave_type = state.leave_type;
    let start_date = state.start_date;
    let end_date = state.end_date;
    let reason = state.reason;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-fg">{"Leave application"}</h3>
                <p class="text-sm text-fg-muted">{"Choose the leave type and dates, then tell us why."}</p>
            </div>
            <MessageBanner message=message />
            <form
                class="space-y-4"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <div>
                    <label for="leave-type" class="block text-sm font-medium text-fg">{"Leave type"}</label>
                    <select
                        id="leave-type"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || leave_type.get()
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        <option value="">{"Select leave type"}</option>
                        {LeaveType::ALL
                            .iter()
                            .map(|kind| view! { <option value=kind.as_str()>{kind.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label for="start-date" class="block text-sm font-medium text-fg">{"Start date"}</label>
                        <input
                            id="start-date"
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || start_date.get()
                            on:input=move |ev| start_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="end-date" class="block text-sm font-medium text-fg">{"End date"}</label>
                        <input
                            id="end-date"
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || end_date.get()
                            on:input=move |ev| end_date.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <p class="text-sm text-fg-muted">
                    {"Days taken: "}
                    <span class="font-semibold" data-testid="days-taken">{move || days_taken.get()}</span>
                </p>
                <div>
                    <label for="reason" class="block text-sm font-medium text-fg">{"Reason"}</label>
                    <textarea
                        id="reason"
                        rows=3
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit application" }}
                </button>
            </form>
        </div>
    }
}
