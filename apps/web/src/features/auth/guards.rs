use crate::features::auth::state::use_session;
use admin_session::paths;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Renders children only for an authenticated admin session; otherwise sends
/// the client to the login page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !session.is_authenticated.get() {
            // UX-only guard; real access control must live on the API.
            navigate(
                paths::LOGIN,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || session.is_authenticated.get()>
            {children()}
        </Show>
    }
}
