//! Admin landing page reached after two-factor verification.

use crate::components::PageHeader;
use crate::features::auth::state::use_session;
use admin_session::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const SHORTCUTS: [(&str, &str, &str); 5] = [
    (paths::APPOINTMENTS, "event", "Lịch hẹn"),
    (paths::ARTISTS, "brush", "Nghệ sĩ"),
    (paths::CUSTOMERS, "group", "Khách hàng"),
    (paths::REVIEWS, "reviews", "Đánh giá"),
    (paths::SERVICES, "spa", "Dịch vụ"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    view! {
        <PageHeader title="Tổng quan" description="Bảng điều khiển quản trị salon." />
        <p class="mb-6 text-gray-600">
            "Xin chào, "
            <span class="font-semibold text-[#A67396]">{move || session.email.get()}</span>
        </p>
        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
            {SHORTCUTS
                .into_iter()
                .map(|(href, icon, label)| {
                    view! {
                        <A
                            href=href
                            {..}
                            class="flex items-center gap-3 rounded-xl border border-gray-200 bg-white p-5 shadow-sm transition hover:border-[#C29BB5] hover:shadow-md"
                        >
                            <span class="material-symbols-outlined text-2xl text-[#A67396]">{icon}</span>
                            <span class="font-medium text-gray-800">{label}</span>
                        </A>
                    }
                })
                .collect_view()}
        </div>
    }
}
