use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository::LoginRepository,
    state::session::{self, Role, Session},
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn from_storage() -> Self {
        Self {
            session: session::load(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<&Role> {
        self.session.as_ref().map(|session| &session.role)
    }

    pub fn is_employee(&self) -> bool {
        self.role().map(Role::is_employee).unwrap_or(false)
    }

    pub fn is_admin(&self) -> bool {
        self.role().map(|role| !role.is_employee()).unwrap_or(false)
    }

    /// Where `/` should send this user.
    pub fn home_path(&self) -> &'static str {
        match self.role() {
            Some(role) => session::dashboard_path(role),
            None => crate::router::LOGIN_PATH,
        }
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx: AuthContext = create_signal(AuthState::from_storage());
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    let response = repo.login(request).await?;
    let session = session::persist(&response).map_err(ApiError::unknown)?;
    log::info!("Signed in with role {:?}", session.role);
    set_auth_state.update(|state| state.session = Some(session.clone()));
    Ok(session)
}

/// Ends the session locally whatever the server answers.
pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let refresh_token = session::load().and_then(|session| session.refresh_token);
    let result = repo.logout(refresh_token).await;
    if let Err(err) = &result {
        log::warn!("Logout request failed: {}", err);
    }
    session::clear();
    set_auth_state.update(|state| state.session = None);
    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(role: Role) -> AuthState {
        AuthState {
            session: Some(Session {
                token: "t".into(),
                refresh_token: None,
                role,
            }),
        }
    }

    #[test]
    fn home_path_follows_role() {
        assert_eq!(AuthState::default().home_path(), "/login");
        assert_eq!(state_with(Role::Employee).home_path(), "/employee-dashboard");
        assert_eq!(state_with(Role::Admin).home_path(), "/dashboard");
    }

    #[test]
    fn role_predicates_require_a_session() {
        let signed_out = AuthState::default();
        assert!(!signed_out.is_authenticated());
        assert!(!signed_out.is_admin());
        assert!(!signed_out.is_employee());
        assert!(state_with(Role::Employee).is_employee());
        assert!(state_with(Role::Other("HR".into())).is_admin());
    }
}
