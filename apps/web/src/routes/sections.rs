//! Framed management sections. Each one renders inside the navigation frame;
//! data views are served by the remote API's own screens.

use crate::components::PageHeader;
use leptos::prelude::*;

/// Heading plus an empty-state panel, shared by sections without a data view.
#[component]
pub(super) fn SectionPage(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <PageHeader title=title description=description />
        <div class="rounded-xl border border-dashed border-gray-300 bg-white p-10 text-center text-sm text-gray-500">
            "Chưa có dữ liệu để hiển thị."
        </div>
    }
}

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    view! { <SectionPage title="Lịch hẹn" description="Theo dõi và sắp xếp lịch hẹn của khách." /> }
}

#[component]
pub fn CustomersPage() -> impl IntoView {
    view! { <SectionPage title="Khách hàng" description="Danh sách khách hàng của salon." /> }
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    view! { <SectionPage title="Đánh giá" description="Phản hồi của khách hàng về dịch vụ." /> }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! { <SectionPage title="Dịch vụ" description="Quản lý các dịch vụ và bảng giá." /> }
}
