use crate::features::auth::state::use_session;
use admin_session::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Shown on the login page when an admin session is already active.
#[component]
pub fn AlreadySignedInPanel() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="text-center space-y-6 py-8">
            <div class="space-y-2">
                <h2 class="text-2xl font-bold text-gray-800">"Bạn đã đăng nhập"</h2>
                <p class="text-gray-500">
                    "Tài khoản hiện tại: "
                    <span class="font-semibold text-[#A67396]">{move || session.email.get()}</span>
                </p>
            </div>
            <div class="flex flex-col gap-3">
                <A
                    href=paths::DASHBOARD
                    {..}
                    class="w-full inline-flex justify-center py-3 text-lg bg-[#C29BB5] hover:bg-[#b387a5] text-white rounded-lg font-semibold transition"
                >
                    "Vào trang quản trị"
                </A>
                <button
                    type="button"
                    on:click=move |_| session.sign_out()
                    class="w-full py-3 text-lg border border-gray-300 text-gray-700 rounded-lg font-semibold hover:bg-gray-50 transition cursor-pointer"
                >
                    "Đăng xuất"
                </button>
            </div>
        </div>
    }
}
