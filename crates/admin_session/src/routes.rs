//! Console routing surface. Bare routes render on their own; framed routes
//! render inside the shared navigation frame.

pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const TWO_FACTOR: &str = "/two_face";
    pub const DASHBOARD: &str = "/dashboard-admin";
    pub const APPOINTMENTS: &str = "/appointments";
    pub const ARTISTS: &str = "/artists";
    pub const CUSTOMERS: &str = "/customers";
    pub const REVIEWS: &str = "/reviews";
    pub const SERVICES: &str = "/services";

    pub fn artist_detail(id: &str) -> String {
        format!("{ARTISTS}/{id}")
    }

    pub fn artist_schedule(id: &str) -> String {
        format!("{ARTISTS}/{id}/schedule")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    TwoFactor,
    Root,
    Dashboard,
    Appointments,
    Artists,
    ArtistDetail { id: String },
    ArtistSchedule { id: String },
    Customers,
    Reviews,
    Services,
}

impl AppRoute {
    /// Matches a location pathname. Trailing slashes are ignored; query and
    /// fragment must already be stripped.
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(AppRoute::Root);
        }

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        let route = match segments.as_slice() {
            ["login"] => AppRoute::Login,
            ["two_face"] => AppRoute::TwoFactor,
            ["dashboard-admin"] => AppRoute::Dashboard,
            ["appointments"] => AppRoute::Appointments,
            ["artists"] => AppRoute::Artists,
            ["artists", id] if !id.is_empty() => AppRoute::ArtistDetail { id: id.to_string() },
            ["artists", id, "schedule"] if !id.is_empty() => {
                AppRoute::ArtistSchedule { id: id.to_string() }
            }
            ["customers"] => AppRoute::Customers,
            ["reviews"] => AppRoute::Reviews,
            ["services"] => AppRoute::Services,
            _ => return None,
        };
        Some(route)
    }

    pub fn is_framed(&self) -> bool {
        !matches!(self, AppRoute::Login | AppRoute::TwoFactor)
    }

    /// Routes that unconditionally send the client elsewhere.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            AppRoute::Root => Some(paths::LOGIN),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Login => paths::LOGIN.to_string(),
            AppRoute::TwoFactor => paths::TWO_FACTOR.to_string(),
            AppRoute::Root => paths::ROOT.to_string(),
            AppRoute::Dashboard => paths::DASHBOARD.to_string(),
            AppRoute::Appointments => paths::APPOINTMENTS.to_string(),
            AppRoute::Artists => paths::ARTISTS.to_string(),
            AppRoute::ArtistDetail { id } => paths::artist_detail(id),
            AppRoute::ArtistSchedule { id } => paths::artist_schedule(id),
            AppRoute::Customers => paths::CUSTOMERS.to_string(),
            AppRoute::Reviews => paths::REVIEWS.to_string(),
            AppRoute::Services => paths::SERVICES.to_string(),
        }
    }

    /// Top-level navigation section the route belongs to, used to highlight
    /// the sidebar entry.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            AppRoute::Dashboard => Some(paths::DASHBOARD),
            AppRoute::Appointments => Some(paths::APPOINTMENTS),
            AppRoute::Artists | AppRoute::ArtistDetail { .. } | AppRoute::ArtistSchedule { .. } => {
                Some(paths::ARTISTS)
            }
            AppRoute::Customers => Some(paths::CUSTOMERS),
            AppRoute::Reviews => Some(paths::REVIEWS),
            AppRoute::Services => Some(paths::SERVICES),
            AppRoute::Login | AppRoute::TwoFactor | AppRoute::Root => None,
        }
    }
}
