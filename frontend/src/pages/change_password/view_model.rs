use super::{
    repository::ChangePasswordRepository,
    utils::{self, PasswordFormState},
};
use crate::api::{ApiClient, ApiError, ChangePasswordRequest, MessageResponse};
use crate::components::messages::{schedule_dismiss, MessageState};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ChangePasswordViewModel {
    pub form: PasswordFormState,
    pub message: RwSignal<MessageState>,
    pub action: Action<ChangePasswordRequest, Result<MessageResponse, ApiError>>,
}

impl ChangePasswordViewModel {
    pub fn submit(&self) {
        if self.action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.message.update(MessageState::clear);
                self.action.dispatch(request);
            }
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }
}

pub fn use_change_password_view_model() -> ChangePasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(ChangePasswordRepository::new_with_client(Rc::new(api)));
    let form = PasswordFormState::default();
    let message = create_rw_signal(MessageState::default());

    let action = create_action(move |request: &ChangePasswordRequest| {
        let repo = repository.get_value();
        let request = request.clone();
        async move { repo.change_password(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = action.value().get() {
            match result {
                Ok(response) => {
                    form.reset();
                    let text = response
                        .message
                        .unwrap_or_else(|| utils::SUCCESS_MESSAGE.to_string());
                    message.update(|msg| msg.set_success(text));
                }
                Err(err) => message.update(|msg| msg.set_error(utils::failure_message(err))),
            }
            schedule_dismiss(message);
        }
    });

    ChangePasswordViewModel {
        form,
        message,
        action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::MockServer;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn mismatched_passwords_make_no_request() {
        let server = MockServer::start();
        let base_url = server.url("/api");
        with_runtime(|| {
            provide_context(ApiClient::new_with_base_url(base_url));
            let vm = use_change_password_view_model();
            vm.form.current_password.set("old".into());
            vm.form.new_password.set("first".into());
            vm.form.confirm_password.set("second".into());
            vm.submit();
            assert_eq!(
                vm.message.get().error.map(|e| e.error).as_deref(),
                Some(utils::MISMATCH_MESSAGE)
            );
            assert_eq!(vm.action.version().get_untracked(), 0);
        });
        assert_eq!(server.hits(), 0);
    }
}
