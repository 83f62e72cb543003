use crate::api::{LeaveDecision, LeaveRecord};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
    messages::MessageBanner,
};
use crate::pages::leave_requests::{
    components::table::LeaveRequestsTable,
    utils::decision_copy,
    view_model::{use_leave_requests_view_model, LeaveListScope},
};
use leptos::*;

#[component]
pub fn MyLeaveRequestsPage() -> impl IntoView {
    let vm = use_leave_requests_view_model(LeaveListScope::Mine);

    view! {
        <div class="space-y-4">
            <PageHeader title="My leave requests" description="Every leave application you have submitted." />
            <InlineErrorMessage error=vm.load_error />
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <LeaveRequestsTable records=vm.records />
            </Show>
        </div>
    }
}

#[component]
pub fn AdminLeaveRequestsPage() -> impl IntoView {
    let vm = use_leave_requests_view_model(LeaveListScope::All);
    let dialog_open = Signal::derive(move || vm.pending_review.with(Option::is_some));
    let dialog_copy = move || {
        vm.pending_review
            .get()
            .map(|target| decision_copy(target.decision))
            .unwrap_or(("", ""))
    };
    let destructive = Signal::derive(move || {
        matches!(
            vm.pending_review.get().map(|target| target.decision),
            Some(LeaveDecision::Reject)
        )
    });
    let on_review = Callback::new(move |(record, decision): (LeaveRecord, LeaveDecision)| {
        vm.message.update(|msg| msg.clear());
        vm.request_review(&record, decision);
    });

    view! {
        <div class="space-y-4">
            <PageHeader title="Leave requests" description="Approve or reject pending leave requests." />
            <MessageBanner message=vm.message />
            <InlineErrorMessage error=vm.load_error />
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <LeaveRequestsTable records=vm.records on_review=on_review />
            </Show>
            {move || {
                let reject = destructive.get();
                view! {
                    <ConfirmDialog
                        is_open=dialog_open
                        title=Signal::derive(move || dialog_copy().0.to_string())
                        message=Signal::derive(move || dialog_copy().1.to_string())
                        confirm_label=if reject { "Reject" } else { "Approve" }
                        pending=vm.review_action.pending()
                        destructive=reject
                        on_confirm=Callback::new(move |_| vm.confirm_review())
                        on_cancel=Callback::new(move |_| vm.cancel_review())
                    />
                }
            }}
        </div>
    }
}
