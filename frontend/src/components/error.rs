use crate::api::ApiError;
use leptos::*;

fn field_errors(error: &ApiError) -> Vec<String> {
    let Some(details) = error.details.as_ref().and_then(|d| d.as_object()) else {
        return Vec::new();
    };
    details
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "error" | "detail" | "message"))
        .flat_map(|(field, value)| {
            let messages: Vec<String> = match value {
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                serde_json::Value::String(text) => vec![text.clone()],
                _ => Vec::new(),
            };
            messages
                .into_iter()
                .map(move |message| format!("{}: {}", field, message))
        })
        .collect()
}

/// Inline error block; lists per-field messages from a DRF validation body.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let items = error.get().map(|e| field_errors(&e)).unwrap_or_default();
                    if items.is_empty() {
                        ().into_view()
                    } else {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }}
            </div>
        </Show>
    }
}
