//! Shared frontend utilities for API access, configuration, storage, logging,
//! and build metadata.
//!
//! ## Sign-in Flow
//!
//! 1. **Login:** `/login` posts email and password to `/api/user-account/login`.
//!    The email is persisted so the next step knows where the code was sent.
//! 2. **Two-factor:** `/two_face` posts `{ email, twoFactorCode }` to
//!    `/api/user-account/verify-twofactor-code`. The returned bearer token must
//!    carry the `Admin` role claim before the session is admitted and persisted.
//! 3. **Resend:** the same page can ask `/api/user-account/resend-code` (multipart,
//!    field `Email`) for a fresh code.
//!
//! The session record, including the bearer and refresh tokens, lives in
//! `localStorage`. Callers must never log it.

pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod storage;
pub(crate) mod telemetry;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

pub(crate) use admin_session::AppError;
pub(crate) use api::{post_form, post_json};
