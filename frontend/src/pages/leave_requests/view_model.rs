use super::{
    repository::LeaveRequestsRepository,
    utils::{can_review, decision_success, replace_leave},
};
use crate::api::{ApiClient, ApiError, LeaveDecision, LeaveRecord};
use crate::components::messages::{schedule_dismiss, MessageState};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveListScope {
    Mine,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewTarget {
    pub id: i64,
    pub decision: LeaveDecision,
}

#[derive(Clone, Copy)]
pub struct LeaveRequestsViewModel {
    pub records: RwSignal<Vec<LeaveRecord>>,
    pub loading: Signal<bool>,
    pub load_error: Signal<Option<ApiError>>,
    pub message: RwSignal<MessageState>,
    pub pending_review: RwSignal<Option<ReviewTarget>>,
    pub review_action: Action<ReviewTarget, Result<(LeaveDecision, LeaveRecord), ApiError>>,
}

impl LeaveRequestsViewModel {
    /// Opens the confirmation for `record`; ignored once it has been decided.
    pub fn request_review(&self, record: &LeaveRecord, decision: LeaveDecision) {
        if !can_review(record) {
            return;
        }
        self.pending_review.set(Some(ReviewTarget {
            id: record.id,
            decision,
        }));
    }

    pub fn confirm_review(&self) {
        if self.review_action.pending().get_untracked() {
            return;
        }
        if let Some(target) = self.pending_review.get_untracked() {
            self.review_action.dispatch(target);
        }
    }

    pub fn cancel_review(&self) {
        if !self.review_action.pending().get_untracked() {
            self.pending_review.set(None);
        }
    }
}

fn apply_review_result(
    records: RwSignal<Vec<LeaveRecord>>,
    message: RwSignal<MessageState>,
    result: Result<(LeaveDecision, LeaveRecord), ApiError>,
) {
    match result {
        Ok((decision, updated)) => {
            log::info!("Leave {} is now {}", updated.id, updated.status.as_str());
            records.update(|rows| {
                replace_leave(rows, updated);
            });
            message.update(|msg| msg.set_success(decision_success(decision)));
        }
        Err(err) => message.update(|msg| msg.set_error(err)),
    }
}

pub fn use_leave_requests_view_model(scope: LeaveListScope) -> LeaveRequestsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(LeaveRequestsRepository::new_with_client(Rc::new(api)));
    let records = create_rw_signal(Vec::<LeaveRecord>::new());
    let message = create_rw_signal(MessageState::default());
    let pending_review = create_rw_signal(None::<ReviewTarget>);

    let resource = create_resource(
        move || scope,
        move |scope| {
            let repo = repository.get_value();
            async move {
                match scope {
                    LeaveListScope::Mine => repo.list_mine().await,
                    LeaveListScope::All => repo.list_all().await,
                }
            }
        },
    );
    let loading = resource.loading().into();
    let load_error = Signal::derive(move || resource.get().and_then(|result| result.err()));

    create_effect(move |_| {
        if let Some(Ok(list)) = resource.get() {
            records.set(list);
        }
    });

    let review_action = create_action(move |target: &ReviewTarget| {
        let repo = repository.get_value();
        let target = *target;
        async move {
            repo.review(target.id, target.decision)
                .await
                .map(|updated| (target.decision, updated))
        }
    });

    create_effect(move |_| {
        let Some(result) = review_action.value().get() else {
            return;
        };
        apply_review_result(records, message, result);
        pending_review.set(None);
        schedule_dismiss(message);
    });

    LeaveRequestsViewModel {
        records,
        loading,
        load_error,
        message,
        pending_review,
        review_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::LeaveStatus;
    use crate::test_support::ssr::with_runtime;
    use chrono::NaiveDate;

    fn record(id: i64, status: LeaveStatus) -> LeaveRecord {
        LeaveRecord {
            id,
            employee: None,
            leave_type: "Annual".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            days_taken: 2.0,
            reason: Some("Trip".into()),
            status,
            applied_on: None,
            approved_on: None,
            approved_by: None,
        }
    }

    #[test]
    fn review_can_only_be_requested_for_pending_records() {
        with_runtime(|| {
            let vm = use_leave_requests_view_model(LeaveListScope::All);
            vm.request_review(&record(1, LeaveStatus::Approved), LeaveDecision::Reject);
            assert!(vm.pending_review.get().is_none());

            vm.request_review(&record(2, LeaveStatus::Pending), LeaveDecision::Approve);
            assert_eq!(
                vm.pending_review.get(),
                Some(ReviewTarget {
                    id: 2,
                    decision: LeaveDecision::Approve
                })
            );

            vm.cancel_review();
            assert!(vm.pending_review.get().is_none());
        });
    }

    #[test]
    fn reject_outcome_reports_rejection_without_a_pending_target() {
        with_runtime(|| {
            let records = create_rw_signal(vec![record(5, LeaveStatus::Pending)]);
            let message = create_rw_signal(MessageState::default());

            apply_review_result(
                records,
                message,
                Ok((LeaveDecision::Reject, record(5, LeaveStatus::Rejected))),
            );

            assert_eq!(
                message.get_untracked().success.as_deref(),
                Some("Leave request rejected.")
            );
            assert_eq!(records.get_untracked()[0].status, LeaveStatus::Rejected);
        });
    }

    #[test]
    fn failed_review_keeps_rows_and_shows_error() {
        with_runtime(|| {
            let records = create_rw_signal(vec![record(5, LeaveStatus::Pending)]);
            let message = create_rw_signal(MessageState::default());

            apply_review_result(records, message, Err(ApiError::unauthorized()));

            assert!(message.get_untracked().success.is_none());
            assert!(message.get_untracked().error.is_some());
            assert_eq!(records.get_untracked()[0].status, LeaveStatus::Pending);
        });
    }
}
