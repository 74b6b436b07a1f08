use crate::features::auth::state::SessionProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <div class="w-full max-w-[100vw] overflow-x-hidden">
                <Router>
                    <AppRoutes />
                </Router>
            </div>
        </SessionProvider>
    }
}
