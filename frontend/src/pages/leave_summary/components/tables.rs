use crate::components::empty_state::EmptyState;
use crate::pages::leave_summary::utils::EmployeeLeaveSummary;
use crate::utils::time::format_days;
use leptos::*;
use std::collections::BTreeMap;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

#[component]
pub fn LeaveTypeSummaryTable(#[prop(into)] totals: Signal<BTreeMap<String, f64>>) -> impl IntoView {
    view! {
        <Show
            when=move || !totals.with(BTreeMap::is_empty)
            fallback=|| view! { <EmptyState title="No approved leave this year" /> }
        >
            <table class="min-w-full divide-y divide-border bg-surface-elevated shadow rounded-lg">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class=TH>{"Leave type"}</th>
                        <th class=TH>{"Days taken"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        totals
                            .get()
                            .into_iter()
                            .map(|(kind, days)| view! {
                                <tr>
                                    <td class=TD>{kind}</td>
                                    <td class=TD>{format_days(days)}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

#[component]
pub fn EmployeeSummaryTable(#[prop(into)] rows: Signal<Vec<EmployeeLeaveSummary>>) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="No approved leave this year" /> }
        >
            <table class="min-w-full divide-y divide-border bg-surface-elevated shadow rounded-lg">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class=TH>{"Employee"}</th>
                        <th class=TH>{"Leave type"}</th>
                        <th class=TH>{"Days taken"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        rows.get()
                            .into_iter()
                            .flat_map(|summary| {
                                let total = summary.total_days();
                                let mut lines: Vec<(String, String, f64, bool)> = summary
                                    .totals
                                    .into_iter()
                                    .map(|(kind, days)| (summary.employee_name.clone(), kind, days, false))
                                    .collect();
                                lines.push((String::new(), "Total".to_string(), total, true));
                                lines
                            })
                            .map(|(name, kind, days, is_total)| view! {
                                <tr class:font-semibold=is_total>
                                    <td class=TD>{name}</td>
                                    <td class=TD>{kind}</td>
                                    <td class=TD>{format_days(days)}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
