use leptos::*;

/// Runs `f` inside a fresh reactive runtime. Resources are created but never
/// fetched, so view models can be built without an executor.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    leptos_reactive::suppress_resource_load(true);
    let result = f();
    leptos_reactive::suppress_resource_load(false);
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}
