//! Shared navigation frame for every page except login and two-factor. The frame
//! is gated on an authenticated admin session; navigation stays client-side and
//! the API must still enforce access control.

use crate::components::layout::Sidebar;
use crate::features::auth::{RequireSession, state::use_session};
use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn AdminLayout() -> impl IntoView {
    let session = use_session();

    view! {
        <RequireSession>
            <div class="min-h-screen flex bg-gray-50">
                <Sidebar />
                <div class="flex-1 flex flex-col">
                    <header class="flex items-center justify-end gap-4 border-b border-gray-200 bg-white px-6 py-4">
                        <span class="text-sm text-gray-500">{move || session.email.get()}</span>
                        <button
                            type="button"
                            class="text-sm font-medium text-[#A67396] hover:underline cursor-pointer"
                            // The guard redirects to login once the session is gone.
                            on:click=move |_| session.sign_out()
                        >
                            "Đăng xuất"
                        </button>
                    </header>
                    <main class="flex-1 p-6">
                        <Outlet />
                    </main>
                </div>
            </div>
        </RequireSession>
    }
}
