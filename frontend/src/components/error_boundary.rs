use crate::utils::navigation;
use leptos::*;

/// Catches errors rendered anywhere below it and offers reload/home recovery.
#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            for (_, error) in errors.get_untracked() {
                log::error!("Unhandled view error: {}", error);
            }
            view! { <ErrorPanel/> }
        }>
            {children()}
        </ErrorBoundary>
    }
}

#[component]
pub fn ErrorPanel() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface p-4">
            <div class="max-w-md w-full rounded-lg border border-status-error-border bg-surface-elevated shadow p-6 space-y-4 text-center" role="alert">
                <h1 class="text-2xl font-bold text-fg">"Something went wrong"</h1>
                <p class="text-sm text-fg-muted">
                    "An unexpected error occurred while displaying this page. You can reload the page or return home."
                </p>
                <div class="flex justify-center gap-3">
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                        on:click=move |_| navigation::reload()
                    >
                        "Reload Page"
                    </button>
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                        on:click=move |_| navigation::redirect("/")
                    >
                        "Go Home"
                    </button>
                </div>
            </div>
        </div>
    }
}
