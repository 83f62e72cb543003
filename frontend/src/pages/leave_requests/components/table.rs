use crate::api::{LeaveDecision, LeaveRecord};
use crate::components::empty_state::EmptyState;
use crate::pages::leave_requests::utils::{can_review, status_badge_class};
use crate::utils::time::{format_days, format_timestamp};
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

/// Leave records table. Supplying `on_review` switches to the admin columns
/// with approve/reject actions.
#[component]
pub fn LeaveRequestsTable(
    #[prop(into)] records: Signal<Vec<LeaveRecord>>,
    #[prop(optional)] on_review: Option<Callback<(LeaveRecord, LeaveDecision)>>,
) -> impl IntoView {
    let admin = on_review.is_some();

    view! {
        <Show
            when=move || !records.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="No leave requests found" /> }
        >
            <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            {admin.then(|| view! { <th class=TH>{"Employee"}</th> })}
                            <th class=TH>{"Type"}</th>
                            <th class=TH>{"Start"}</th>
                            <th class=TH>{"End"}</th>
                            <th class=TH>{"Days"}</th>
                            <th class=TH>{"Reason"}</th>
                            <th class=TH>{"Applied on"}</th>
                            <th class=TH>{"Status"}</th>
                            {admin.then(|| view! {
                                <th class=TH>{"Approved on"}</th>
                                <th class=TH>{"Approved by"}</th>
                                <th class=TH>{"Actions"}</th>
                            })}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || records.get()
                            key=|record| (record.id, record.status.as_str().to_string())
                            children=move |record: LeaveRecord| {
                                let reviewable = can_review(&record);
                                let row = store_value(record.clone());
                                view! {
                                    <tr>
                                        {admin.then(|| view! { <td class=TD>{record.employee_name()}</td> })}
                                        <td class=TD>{record.leave_type.clone()}</td>
                                        <td class=TD>{record.start_date.to_string()}</td>
                                        <td class=TD>{record.end_date.to_string()}</td>
                                        <td class=TD>{format_days(record.days_taken)}</td>
                                        <td class="px-4 py-3 text-sm text-fg">{record.reason.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class=TD>{format_timestamp(record.applied_on.as_ref())}</td>
                                        <td class=TD>
                                            <span class=format!(
                                                "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
                                                status_badge_class(&record.status),
                                            )>
                                                {record.status.as_str().to_string()}
                                            </span>
                                        </td>
                                        {on_review.map(|on_review| view! {
                                            <td class=TD>{format_timestamp(record.approved_on.as_ref())}</td>
                                            <td class=TD>{record.approver_name()}</td>
                                            <td class=TD>
                                                <div class="flex gap-2">
                                                    <button
                                                        class="text-green-700 hover:underline disabled:opacity-40 disabled:no-underline"
                                                        disabled=!reviewable
                                                        on:click=move |_| on_review.call((row.get_value(), LeaveDecision::Approve))
                                                    >
                                                        {"Approve"}
                                                    </button>
                                                    <button
                                                        class="text-red-700 hover:underline disabled:opacity-40 disabled:no-underline"
                                                        disabled=!reviewable
                                                        on:click=move |_| on_review.call((row.get_value(), LeaveDecision::Reject))
                                                    >
                                                        {"Reject"}
                                                    </button>
                                                </div>
                                            </td>
                                        })}
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
