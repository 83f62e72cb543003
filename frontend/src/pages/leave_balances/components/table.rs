use crate::api::{Employee, LeaveBalance, LeaveCounters};
use crate::components::empty_state::EmptyState;
use crate::utils::time::format_days;
use leptos::*;

const TH: &str = "px-3 py-3 text-center text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-3 py-3 whitespace-nowrap text-sm text-fg text-center";

#[component]
pub fn LeaveBalanceTable(
    #[prop(into)] balances: Signal<Vec<LeaveBalance>>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_edit: Callback<LeaveBalance>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !balances.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="No leave balances yet" description="Add a balance to get started." /> }
        >
            <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-3 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Employee"}</th>
                            {LeaveCounters::FIELDS
                                .iter()
                                .map(|(_, label)| view! { <th class=TH>{*label}</th> })
                                .collect_view()}
                            <th class=TH>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || {
                            let roster = employees.get();
                            balances
                                .get()
                                .into_iter()
                                .map(|balance| {
                                    let name = balance.employee_name(&roster);
                                    let values = balance.counters.values();
                                    let row = store_value(balance);
                                    view! {
                                        <tr>
                                            <td class="px-3 py-3 whitespace-nowrap text-sm text-fg">{name}</td>
                                            {values
                                                .into_iter()
                                                .map(|value| view! { <td class=TD>{format_days(value)}</td> })
                                                .collect_view()}
                                            <td class=TD>
                                                <button
                                                    class="text-link hover:underline"
                                                    on:click=move |_| on_edit.call(row.get_value())
                                                >
                                                    {"Edit"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
