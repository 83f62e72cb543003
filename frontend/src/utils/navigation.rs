//! Full-page navigation outside the router (session expiry, error recovery).

#[cfg(target_arch = "wasm32")]
mod backend {
    pub fn current_path() -> Option<String> {
        web_sys::window().and_then(|win| win.location().pathname().ok())
    }

    pub fn redirect(path: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(path);
        }
    }

    pub fn reload() {
        if let Some(win) = web_sys::window() {
            let _ = win.location().reload();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;

    thread_local! {
        static LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    pub fn current_path() -> Option<String> {
        LOCATION.with(|location| location.borrow().clone())
    }

    pub fn redirect(path: &str) {
        LOCATION.with(|location| *location.borrow_mut() = Some(path.to_string()));
    }

    pub fn reload() {}

    #[cfg(test)]
    pub fn take_last_redirect() -> Option<String> {
        LOCATION.with(|location| location.borrow_mut().take())
    }
}

pub use backend::*;

/// Redirects unless the browser is already on `path`.
pub fn redirect_if_elsewhere(path: &str) {
    if current_path().as_deref() == Some(path) {
        return;
    }
    log::info!("Redirecting to {}", path);
    redirect(path);
}
