use leptos::*;
use percent_encoding::percent_decode_str;

/// Leading run of letters, digits and whitespace of a `theme` value.
pub fn sanitize_theme(raw: &str) -> Option<String> {
    let prefix: String = raw
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let trimmed = prefix.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn decode_component(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

/// Decodes `search` the way `URLSearchParams` does and sanitizes the first
/// `theme` entry.
pub fn theme_from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .find(|(key, _)| key == "theme")
        .and_then(|(_, value)| sanitize_theme(&value))
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Option<String>>,
}

impl ThemeState {
    pub fn from_location() -> Self {
        let search = location_search().unwrap_or_default();
        Self {
            theme: create_rw_signal(theme_from_query(&search)),
        }
    }

    pub fn apply_to_dom(&self) {
        let Some(theme) = self.theme.get_untracked() else {
            return;
        };
        log::info!("Applying theme {}", theme);
        set_document_theme(&theme);
    }
}

#[cfg(target_arch = "wasm32")]
fn location_search() -> Option<String> {
    web_sys::window().and_then(|w| w.location().search().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn location_search() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn set_document_theme(theme: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_document_theme(_theme: &str) {}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::from_location();
    provide_context(state);
    state.apply_to_dom();
    state
}
