//! Artist routes: the list, one artist, and that artist's schedule. Detail and
//! schedule read `:id` from the path and link to each other.

use super::sections::SectionPage;
use crate::components::PageHeader;
use admin_session::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params_map};

const LINK_CLASS: &str = "inline-flex items-center gap-2 text-sm font-medium text-[#A67396] hover:underline";

fn use_artist_id() -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.read().get("id").unwrap_or_default())
}

#[component]
pub fn ArtistsPage() -> impl IntoView {
    view! {
        <SectionPage title="Nghệ sĩ" description="Đội ngũ nghệ sĩ làm đẹp của salon." />
    }
}

#[component]
pub fn ArtistDetailPage() -> impl IntoView {
    let id = use_artist_id();

    view! {
        <PageHeader title="Chi tiết nghệ sĩ" description="Thông tin và dịch vụ của nghệ sĩ." />
        <div class="rounded-xl border border-gray-200 bg-white p-6 space-y-4">
            <p class="text-sm text-gray-600">
                "Mã nghệ sĩ: " <span class="font-mono text-gray-900">{move || id.get()}</span>
            </p>
            <div class="flex gap-6">
                <A href=move || paths::artist_schedule(&id.get()) {..} class=LINK_CLASS>
                    <span class="material-symbols-outlined text-base">"calendar_month"</span>
                    "Xem lịch làm việc"
                </A>
                <A href=paths::ARTISTS {..} class=LINK_CLASS>
                    <span class="material-symbols-outlined text-base">"arrow_back"</span>
                    "Danh sách nghệ sĩ"
                </A>
            </div>
        </div>
    }
}

#[component]
pub fn SchedulePage() -> impl IntoView {
    let id = use_artist_id();

    view! {
        <PageHeader title="Lịch làm việc" description="Khung giờ làm việc và lịch hẹn của nghệ sĩ." />
        <div class="rounded-xl border border-gray-200 bg-white p-6 space-y-4">
            <p class="text-sm text-gray-600">
                "Mã nghệ sĩ: " <span class="font-mono text-gray-900">{move || id.get()}</span>
            </p>
            <A href=move || paths::artist_detail(&id.get()) {..} class=LINK_CLASS>
                <span class="material-symbols-outlined text-base">"arrow_back"</span>
                "Quay lại hồ sơ nghệ sĩ"
            </A>
        </div>
    }
}
