use crate::api::PayrollRecord;
use crate::components::empty_state::EmptyState;
use crate::utils::time::format_days;
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[component]
pub fn PayslipTable(
    #[prop(into)] payslips: Signal<Vec<PayrollRecord>>,
    #[prop(into)] downloading: Signal<bool>,
    on_download: Callback<PayrollRecord>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !payslips.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="No payslips available" /> }
        >
            <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class=TH>{"Period"}</th>
                            <th class=TH>{"Net pay"}</th>
                            <th class=TH>{"Overtime days"}</th>
                            <th class=TH>{"Unpaid days"}</th>
                            <th class=TH>{"Deductions"}</th>
                            <th class=TH>{"Remarks"}</th>
                            <th class=TH></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || payslips.get()
                            key=|slip| slip.id
                            children=move |slip: PayrollRecord| {
                                let row = store_value(slip.clone());
                                view! {
                                    <tr>
                                        <td class=TD>{format!("{} {}", slip.month, slip.year)}</td>
                                        <td class=TD>{format_amount(slip.total_salary_for_month)}</td>
                                        <td class=TD>{format_days(slip.overtime_days)}</td>
                                        <td class=TD>{format_days(slip.unpaid_days)}</td>
                                        <td class=TD>{format_amount(slip.other_deductions)}</td>
                                        <td class="px-4 py-3 text-sm text-fg">{slip.remarks.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class=TD>
                                            <button
                                                class="text-link hover:underline disabled:opacity-50"
                                                disabled=move || downloading.get()
                                                on:click=move |_| on_download.call(row.get_value())
                                            >
                                                {"Download PDF"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
