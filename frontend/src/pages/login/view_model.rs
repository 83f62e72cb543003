use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest};
use crate::state::{auth, session};
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<session::Session, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => {
                    error.set(None);
                    form.reset_password();
                    navigation::redirect(session::dashboard_path(&session.role));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.username.get().is_empty());
        });
    }

    #[test]
    fn submit_with_missing_fields_sets_inline_error() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.form.username.set("jdoe".into());
            vm.submit();
            let err = vm.error.get().expect("validation error");
            assert_eq!(err.error, "Please fill in all required fields.");
            assert_eq!(vm.login_action.version().get_untracked(), 0);
        });
    }
}
