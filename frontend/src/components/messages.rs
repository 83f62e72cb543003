use crate::api::ApiError;
use crate::components::layout::{ErrorMessage, SuccessMessage};
use leptos::*;

/// How long a form message stays on screen.
pub const MESSAGE_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, err: ApiError) {
        self.error = Some(err);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.error.is_none()
    }
}

/// Clears `message` after [`MESSAGE_DISMISS_MS`] unless it changed meanwhile.
pub fn schedule_dismiss(message: RwSignal<MessageState>) {
    schedule_dismiss_after(message, MESSAGE_DISMISS_MS);
}

pub fn schedule_dismiss_after(message: RwSignal<MessageState>, millis: u32) {
    let snapshot = message.get_untracked();
    if snapshot.is_empty() {
        return;
    }
    dismiss_later(millis, move || {
        message.try_update(|current| {
            if *current == snapshot {
                current.clear();
            }
        });
    });
}

#[cfg(target_arch = "wasm32")]
fn dismiss_later(millis: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, f).forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn dismiss_later(_millis: u32, _f: impl FnOnce() + 'static) {}

#[component]
pub fn MessageBanner(#[prop(into)] message: Signal<MessageState>) -> impl IntoView {
    move || {
        let state = message.get();
        match (state.error, state.success) {
            (Some(err), _) => view! { <ErrorMessage message=err.error /> }.into_view(),
            (None, Some(text)) => view! { <SuccessMessage message=text /> }.into_view(),
            (None, None) => ().into_view(),
        }
    }
}
