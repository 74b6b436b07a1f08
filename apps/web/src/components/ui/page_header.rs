use leptos::prelude::*;

/// Title block at the top of every framed page.
#[component]
pub fn PageHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-1 mb-6">
            <h1 class="text-2xl font-semibold text-gray-900">{title}</h1>
            <p class="text-sm text-gray-500">{description}</p>
        </div>
    }
}
