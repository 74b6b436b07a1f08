//! Layout components shared across routes.

mod admin_layout;
mod auth_card;
mod sidebar;

pub(crate) use admin_layout::AdminLayout;
pub(crate) use auth_card::AuthCard;
pub(crate) use sidebar::Sidebar;
