use super::{
    repository::AddLeaveRepository,
    utils::{AddLeaveFormState, RECORDED_MESSAGE, RECORDED_MESSAGE_MS},
};
use crate::api::{AddLeaveRequest, ApiClient, ApiError, Employee};
use crate::components::messages::{schedule_dismiss, schedule_dismiss_after, MessageState};
use crate::pages::leave_apply::utils::submission_error;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AddLeaveViewModel {
    pub form: AddLeaveFormState,
    pub message: RwSignal<MessageState>,
    pub days_taken: Signal<u32>,
    pub employees: Signal<Vec<Employee>>,
    pub submit_action: Action<AddLeaveRequest, Result<(), ApiError>>,
}

impl AddLeaveViewModel {
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match self.form.to_payload() {
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

pub fn use_add_leave_view_model() -> AddLeaveViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(AddLeaveRepository::new_with_client(Rc::new(api)));
    let form = AddLeaveFormState::default();
    let message = create_rw_signal(MessageState::default());
    let days_taken = Signal::derive(move || form.days_taken());

    let employees_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.list_employees().await }
        },
    );
    let employees = Signal::derive(move || {
        employees_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });

    let submit_action = create_action(move |payload: &AddLeaveRequest| {
        let repo = repository.get_value();
        let payload = payload.clone();
        async move { repo.submit(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => {
                    log::info!("Leave recorded for an employee");
                    form.reset();
                    message.update(|msg| msg.set_success(RECORDED_MESSAGE));
                    schedule_dismiss_after(message, RECORDED_MESSAGE_MS);
                }
                Err(err) => {
                    message.update(|msg| msg.set_error(submission_error(err)));
                    schedule_dismiss(message);
                }
            }
        }
    });

    AddLeaveViewModel {
        form,
        message,
        days_taken,
        employees,
        submit_action,
    }
}
