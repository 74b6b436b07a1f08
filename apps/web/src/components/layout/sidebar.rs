//! Side navigation for the framed pages. The active entry follows the current
//! route's section, so detail pages such as `/artists/:id/schedule` keep the
//! parent entry highlighted.

use crate::app_lib::GIT_COMMIT_HASH;
use admin_session::{AppRoute, paths};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const LINK_ACTIVE: &str =
    "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors bg-[#C29BB5] text-white";
const LINK_IDLE: &str = "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors text-gray-600 hover:bg-[#fbe8fc]";

const NAV_ITEMS: [(&str, &str, &str); 6] = [
    (paths::DASHBOARD, "dashboard", "Tổng quan"),
    (paths::APPOINTMENTS, "event", "Lịch hẹn"),
    (paths::ARTISTS, "brush", "Nghệ sĩ"),
    (paths::CUSTOMERS, "group", "Khách hàng"),
    (paths::REVIEWS, "reviews", "Đánh giá"),
    (paths::SERVICES, "spa", "Dịch vụ"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let section = Memo::new(move |_| {
        AppRoute::resolve(&location.pathname.get()).and_then(|route| route.section())
    });

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 bg-white overflow-y-auto">
            <div class="px-6 py-6">
                <span class="text-2xl font-extrabold tracking-wide text-[#A67396]">"FLAWLESS"</span>
            </div>
            <nav class="flex-1 px-4 space-y-1">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(target, icon, label)| {
                        let active = Signal::derive(move || section.get() == Some(target));
                        view! { <SidebarLink target=target icon=icon label=label active=active /> }
                    })
                    .collect_view()}
            </nav>
            <div class="p-4 border-t border-gray-100">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {GIT_COMMIT_HASH}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=target
            {..}
            class=move || if active.get() { LINK_ACTIVE } else { LINK_IDLE }
        >
            <span class="material-symbols-outlined mr-3 text-xl">{icon}</span>
            {label}
        </A>
    }
}
