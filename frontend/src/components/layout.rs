use crate::{router, state::auth::{self, use_auth}, utils::navigation};
use leptos::*;

const EMPLOYEE_NAV: &[(&str, &str)] = &[
    (router::EMPLOYEE_DASHBOARD_PATH, "Dashboard"),
    (router::APPLY_LEAVE_PATH, "Apply Leave"),
    (router::MY_LEAVE_REQUESTS_PATH, "My Leaves"),
    (router::MY_LEAVE_BALANCE_PATH, "Leave Balance"),
    (router::MY_LEAVE_SUMMARY_PATH, "Leave Summary"),
    (router::PAYSLIPS_PATH, "Payslips"),
    (router::SALARY_DETAILS_PATH, "Salary Details"),
    (router::CHANGE_PASSWORD_PATH, "Change Password"),
];

const ADMIN_NAV: &[(&str, &str)] = &[
    (router::ADMIN_DASHBOARD_PATH, "Dashboard"),
    (router::LEAVE_REQUESTS_PATH, "Leave Requests"),
    (router::LEAVE_BALANCES_PATH, "Leave Balances"),
    (router::LEAVE_SUMMARY_PATH, "Leave Summary"),
    (router::ADD_LEAVE_PATH, "Add Leave"),
    (router::CHANGE_PASSWORD_PATH, "Change Password"),
];

pub fn nav_links(is_employee: bool) -> &'static [(&'static str, &'static str)] {
    if is_employee {
        EMPLOYEE_NAV
    } else {
        ADMIN_NAV
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let links = move || nav_links(auth.get().is_employee());
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            navigation::redirect(router::LOGIN_PATH);
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"HR Portal"</h1>
                    <nav class="hidden lg:flex space-x-2">
                        {move || links().iter().map(|(href, label)| view! {
                            <a href=*href class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                {*label}
                            </a>
                        }).collect_view()}
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                            disabled=move || logout_pending.get()
                        >
                            "Logout"
                        </button>
                    </nav>
                    <button
                        type="button"
                        class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                        </svg>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="lg:hidden border-t border-border px-4 py-3 space-y-2">
                        {move || links().iter().map(|(href, label)| view! {
                            <a
                                href=*href
                                class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium"
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                        <button
                            on:click=on_logout
                            class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50"
                            disabled=move || logout_pending.get()
                        >
                            "Logout"
                        </button>
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-fg">{title}</h2>
            {description.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_and_admin_navigation_differ() {
        let employee: Vec<_> = nav_links(true).iter().map(|(href, _)| *href).collect();
        let admin: Vec<_> = nav_links(false).iter().map(|(href, _)| *href).collect();
        assert!(employee.contains(&"/payslips"));
        assert!(!employee.contains(&"/leaves/balances"));
        assert!(admin.contains(&"/leaves/requests"));
        assert!(!admin.contains(&"/leaves/apply"));
    }

    #[test]
    fn navigation_targets_are_declared_routes() {
        for (href, _) in nav_links(true).iter().chain(nav_links(false)) {
            assert!(router::ROUTE_PATHS.contains(href), "undeclared nav target {}", href);
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::state::session::{Role, Session};
    use crate::test_support::ssr::render_to_string;

    fn render_header(role: Role) -> String {
        render_to_string(move || {
            let (auth, set_auth) = create_signal(AuthState {
                session: Some(Session {
                    token: "t".into(),
                    refresh_token: None,
                    role,
                }),
            });
            provide_context((auth, set_auth));
            view! { <Header/> }
        })
    }

    #[test]
    fn header_shows_employee_links_for_employees() {
        let html = render_header(Role::Employee);
        assert!(html.contains("Apply Leave"));
        assert!(html.contains("Payslips"));
        assert!(!html.contains("Leave Balances"));
        assert!(!html.contains("Add Leave"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn header_shows_admin_links_for_admins() {
        let html = render_header(Role::Admin);
        assert!(html.contains("Leave Requests"));
        assert!(html.contains("Leave Balances"));
        assert!(html.contains("Add Leave"));
        assert!(!html.contains("Apply Leave"));
    }
}
