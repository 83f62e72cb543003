use crate::api::{ApiError, Employee, LeaveCounters};
use crate::components::error::InlineErrorMessage;
use crate::pages::leave_balances::utils::{BalanceEditor, LeaveBalanceFormState};
use leptos::*;

#[component]
pub fn LeaveBalanceFormModal(
    state: LeaveBalanceFormState,
    #[prop(into)] editor: Signal<BalanceEditor>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let employee = state.employee;
    let editing = Signal::derive(move || matches!(editor.get(), BalanceEditor::Edit(_)));

    view! {
        <Show when=move || editor.get().is_open()>
            <div class="fixed inset-0 z-50 flex items-center justify-center">
                <div class="absolute inset-0 bg-overlay-backdrop" on:click=move |_| on_close.call(())></div>
                <div class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-2xl mx-4 p-6 space-y-4" role="dialog" aria-modal="true">
                    <h3 class="text-lg font-semibold text-fg">{move || editor.get().title()}</h3>
                    <InlineErrorMessage error=error />
                    <form
                        class="space-y-4"
                        on:submit=move |ev: ev::SubmitEvent| {
                            ev.prevent_default();
                            on_submit.call(());
                        }
                    >
                        <div>
                            <label for="balance-employee" class="block text-sm font-medium text-fg">{"Employee"}</label>
                            <select
                                id="balance-employee"
                                class="mt-1 block w-full border rounded px-2 py-1 disabled:opacity-60"
                                disabled=move || editing.get()
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
                        <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                            {state
                                .counters
                                .into_iter()
                                .zip(LeaveCounters::FIELDS)
                                .map(|(field, (name, label))| view! {
                                    <div>
                                        <label for=name class="block text-sm font-medium text-fg">{label}</label>
                                        <input
                                            id=name
                                            type="number"
                                            min="0"
                                            step="0.5"
                                            class="mt-1 block w-full border rounded px-2 py-1"
                                            prop:value=move || field.get()
                                            on:input=move |ev| field.set(event_target_value(&ev))
                                        />
                                    </div>
                                })
                                .collect_view()}
                        </div>
                        <div class="flex justify-end gap-3">
                            <button
                                type="button"
                                class="px-4 py-2 rounded border border-border-strong text-fg"
                                on:click=move |_| on_close.call(())
                            >
                                {"Cancel"}
                            </button>
                            <button
                                type="submit"
                                class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                                disabled=move || pending.get()
                            >
                                {move || if pending.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::render_to_string;

    fn render(editor: BalanceEditor) -> String {
        render_to_string(move || {
            let state = LeaveBalanceFormState::default();
            let editor = create_rw_signal(editor);
            let employees = create_rw_signal(vec![employee(2, "Dorothy", "Vaughan")]);
            let error = create_rw_signal(None::<ApiError>);
            view! {
                <LeaveBalanceFormModal
                    state=state
                    editor=editor
                    employees=employees
                    error=error
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn create_modal_lists_employees_and_all_counters() {
        let html = render(BalanceEditor::Create);
        assert!(html.contains("Add leave balance"));
        assert!(html.contains("Dorothy Vaughan"));
        assert!(html.contains("other_leave_balance"));
        assert!(html.contains("compassionate_leave_balance"));
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render(BalanceEditor::Closed);
        assert!(!html.contains("role=\"dialog\""));
    }
}
