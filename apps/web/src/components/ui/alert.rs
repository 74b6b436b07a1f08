//! Inline alert banners. Messages must be safe to render and never include
//! tokens or codes.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => "mb-4 rounded-lg bg-red-100 p-3 text-red-700",
    };

    view! { <div class=class role="alert">{message}</div> }
}
