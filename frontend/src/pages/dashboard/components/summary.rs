use leptos::*;

#[component]
pub fn SectionCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-fg">{title}</h3>
                {subtitle.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
            </div>
            {children()}
        </div>
    }
}

#[component]
pub fn Metric(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-surface-elevated border border-border shadow-sm">
            <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class="mt-3 text-3xl font-extrabold text-fg">{value}</p>
        </div>
    }
}
