use leptos::*;

#[component]
pub fn QuickLinks(links: &'static [(&'static str, &'static str, &'static str)]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            {links
                .iter()
                .map(|(href, title, hint)| view! {
                    <a href=*href class="block bg-surface-elevated shadow rounded-lg p-4 hover:shadow-md transition-shadow">
                        <p class="text-sm font-semibold text-fg">{*title}</p>
                        <p class="mt-1 text-xs text-fg-muted">{*hint}</p>
                    </a>
                })
                .collect_view()}
        </div>
    }
}
