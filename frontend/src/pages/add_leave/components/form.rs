use crate::api::{Employee, LeaveType};
use crate::components::messages::{MessageBanner, MessageState};
use crate::pages::add_leave::utils::AddLeaveFormState;
use leptos::*;

fn date_input(id: &'static str, label: &'static str, field: RwSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}<span class="text-red-600">{" *"}</span></label>
            <input
                id=id
                type="date"
                class="mt-1 block w-full border rounded px-2 py-1"
                prop:value=move || field.get()
                on:input=move |ev| field.set(event_target_value(&ev))
            />
        </div>
    }
}

fn text_area(id: &'static str, label: &'static str, field: RwSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}<span class="text-red-600">{" *"}</span></label>
            <textarea
                id=id
                rows=2
                class="mt-1 block w-full border rounded px-2 py-1"
                prop:value=move || field.get()
                on:input=move |ev| field.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
pub fn AddLeaveForm(
    state: AddLeaveFormState,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] message: Signal<MessageState>,
    #[prop(into)] days_taken: Signal<u32>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let employee = state.employee;
    let leave_type = state.leave_type;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <MessageBanner message=message />
            <form
                class="space-y-4"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <div>
                    <label for="add-leave-employee" class="block text-sm font-medium text-fg">
                        {"Employee"}<span class="text-red-600">{" *"}</span>
                    </label>
                    <select
                        id="add-leave-employee"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || employee.get()
                        on:change=move |ev| employee.set(event_target_value(&ev))
                    >
                        <option value="">{"Select employee"}</option>
                        {move || {
                            employees
                                .get()
                                .into_iter()
                                .map(|e| view! { <option value=e.id.to_string()>{e.full_name()}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div>
                    <label for="add-leave-type" class="block text-sm font-medium text-fg">
                        {"Leave type"}<span class="text-red-600">{" *"}</span>
                    </label>
                    <select
                        id="add-leave-type"
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
                    {date_input("add-leave-start", "Start date", state.start_date)}
                    {date_input("add-leave-end", "End date", state.end_date)}
                </div>
                <Show when=move || (days_taken.get() > 0)>
                    <p class="text-sm text-fg-muted">
                        {"Days taken: "}
                        <span class="font-semibold">{move || format!("{} day(s)", days_taken.get())}</span>
                    </p>
                </Show>
                {text_area("add-leave-reason", "Reason", state.reason)}
                {text_area("add-leave-remarks", "Remarks", state.remarks)}
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
