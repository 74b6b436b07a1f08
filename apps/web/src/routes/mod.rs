//! Route table. `/login` and `/two_face` render bare; everything else renders
//! inside `AdminLayout`, which also gates on the admin session. Path constants
//! live in `admin_session::paths` so the sidebar and tests share them.

mod artists;
mod dashboard;
mod login;
mod not_found;
mod sections;
mod two_factor;

pub(crate) use artists::{ArtistDetailPage, ArtistsPage, SchedulePage};
pub(crate) use dashboard::DashboardPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use sections::{AppointmentsPage, CustomersPage, ReviewsPage, ServicesPage};
pub(crate) use two_factor::TwoFactorPage;

use crate::components::AdminLayout;
use admin_session::paths;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Routes};
use leptos_router::path;

/// `/` always sends the client to the login page.
#[component]
fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=paths::LOGIN /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/two_face") view=TwoFactorPage />
            <ParentRoute path=path!("") view=AdminLayout>
                <Route path=path!("/") view=RootRedirect />
                <Route path=path!("/dashboard-admin") view=DashboardPage />
                <Route path=path!("/appointments") view=AppointmentsPage />
                <Route path=path!("/artists") view=ArtistsPage />
                <Route path=path!("/artists/:id") view=ArtistDetailPage />
                <Route path=path!("/customers") view=CustomersPage />
                <Route path=path!("/reviews") view=ReviewsPage />
                <Route path=path!("/artists/:id/schedule") view=SchedulePage />
                <Route path=path!("/services") view=ServicesPage />
            </ParentRoute>
        </Routes>
    }
}
