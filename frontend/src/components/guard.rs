use crate::{
    router::LOGIN_PATH,
    state::auth::{use_auth, AuthState},
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Any,
    Admin,
    Employee,
}

/// Where a signed-in or signed-out user goes instead of a view meant for `audience`.
/// `None` means the view may render.
pub fn redirect_target(state: &AuthState, audience: Audience) -> Option<&'static str> {
    if !state.is_authenticated() {
        return Some(LOGIN_PATH);
    }
    let allowed = match audience {
        Audience::Any => true,
        Audience::Admin => state.is_admin(),
        Audience::Employee => state.is_employee(),
    };
    if allowed {
        None
    } else {
        Some(state.home_path())
    }
}

fn should_render_children(state: &AuthState, audience: Audience) -> bool {
    redirect_target(state, audience).is_none()
}

#[component]
fn Guard(audience: Audience, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    create_effect(move |_| {
        if let Some(target) = redirect_target(&auth.get(), audience) {
            navigation::redirect(target);
        }
    });
    view! {
        <Show when=move || auth.with(|state| should_render_children(state, audience))>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! { <Guard audience=Audience::Any children=children/> }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    view! { <Guard audience=Audience::Admin children=children/> }
}

#[component]
pub fn RequireEmployee(children: ChildrenFn) -> impl IntoView {
    view! { <Guard audience=Audience::Employee children=children/> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{Role, Session};

    fn signed_in(role: Role) -> AuthState {
        AuthState {
            session: Some(Session {
                token: "token".into(),
                refresh_token: None,
                role,
            }),
        }
    }

    #[test]
    fn signed_out_users_go_to_login() {
        let state = AuthState::default();
        for audience in [Audience::Any, Audience::Admin, Audience::Employee] {
            assert_eq!(redirect_target(&state, audience), Some("/login"));
            assert!(!should_render_children(&state, audience));
        }
    }

    #[test]
    fn employees_are_kept_out_of_admin_views() {
        let state = signed_in(Role::Employee);
        assert_eq!(redirect_target(&state, Audience::Admin), Some("/employee-dashboard"));
        assert_eq!(redirect_target(&state, Audience::Employee), None);
        assert_eq!(redirect_target(&state, Audience::Any), None);
    }

    #[test]
    fn admins_are_kept_out_of_employee_views() {
        let state = signed_in(Role::Other("Manager".into()));
        assert_eq!(redirect_target(&state, Audience::Employee), Some("/dashboard"));
        assert_eq!(redirect_target(&state, Audience::Admin), None);
    }
}
