use crate::api::LeaveCounters;
use crate::utils::time::format_days;
use leptos::*;

#[component]
pub fn LeaveBalanceCards(counters: LeaveCounters) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4 md:grid-cols-3">
            {counters
                .labelled()
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="bg-surface-elevated shadow rounded-lg p-4">
                        <p class="text-sm text-fg-muted">{label}</p>
                        <p class="mt-1 text-2xl font-semibold text-fg">{format_days(value)}</p>
                        <p class="text-xs text-fg-muted">{"days remaining"}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
