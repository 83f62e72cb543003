use super::{
    repository::LeaveApplicationRepository,
    utils::{self, LeaveFormState},
};
use crate::api::{ApiClient, ApiError, CreateLeaveRequest};
use crate::components::messages::{schedule_dismiss, MessageState};
use crate::utils::time;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct LeaveApplicationViewModel {
    pub form: LeaveFormState,
    pub message: RwSignal<MessageState>,
    pub days_taken: Signal<u32>,
    pub submit_action: Action<CreateLeaveRequest, Result<(), ApiError>>,
}

impl LeaveApplicationViewModel {
    /// Validates locally and dispatches one request when the form is complete.
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match self.form.to_payload(time::today()) {
            Ok(payload) => {
                self.message.update(MessageState::clear);
                self.submit_action.dispatch(payload);
            }
            Err(err) => {
                self.message.update(|msg| msg.set_error(err));
                schedule_dismiss(self.message);
            }
        }
    }
}

pub fn use_leave_application_view_model() -> LeaveApplicationViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(LeaveApplicationRepository::new_with_client(Rc::new(api)));
    let form = LeaveFormState::default();
    let message = create_rw_signal(MessageState::default());
    let days_taken = Signal::derive(move || form.days_taken());

    let submit_action = create_action(move |payload: &CreateLeaveRequest| {
        let repo = repository.get_value();
        let payload = payload.clone();
        async move { repo.submit(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => {
                    log::info!("Leave application submitted");
                    form.reset();
                    message.update(|msg| msg.set_success(utils::SUBMITTED_MESSAGE));
                }
                Err(err) => message.update(|msg| msg.set_error(utils::submission_error(err))),
            }
            schedule_dismiss(message);
        }
    });

    LeaveApplicationViewModel {
        form,
        message,
        days_taken,
        submit_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::MockServer;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn days_taken_follows_the_date_inputs() {
        with_runtime(|| {
            let vm = use_leave_application_view_model();
            assert_eq!(vm.days_taken.get(), 0);
            vm.form.start_date.set("2024-01-01".into());
            vm.form.end_date.set("2024-01-03".into());
            assert_eq!(vm.days_taken.get(), 3);
            vm.form.end_date.set("2023-12-30".into());
            assert_eq!(vm.days_taken.get(), 0);
        });
    }

    #[test]
    fn incomplete_form_shows_required_message_without_dispatching() {
        let server = MockServer::start();
        let base_url = server.url("/api");
        with_runtime(|| {
            provide_context(ApiClient::new_with_base_url(base_url));
            let vm = use_leave_application_view_model();
            vm.form.leave_type.set("Annual".into());
            vm.submit();
            let message = vm.message.get();
            assert_eq!(
                message.error.map(|e| e.error).as_deref(),
                Some(utils::REQUIRED_FIELDS_MESSAGE)
            );
            assert_eq!(vm.submit_action.version().get_untracked(), 0);
        });
        assert_eq!(server.hits(), 0);
    }
}
