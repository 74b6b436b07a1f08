//! Auth feature module: the fetch client for the user-account API, the session
//! context, and the route guard. Decisions about what a response means live in
//! `admin_session`; this module wires them to Leptos. It touches bearer tokens
//! and one-time codes and must never log them.

pub(crate) mod client;
mod guards;
pub(crate) mod state;

pub(crate) use guards::RequireSession;
