//! Session and two-factor verification logic for the Flawless admin console.
//!
//! The web crate renders; this crate decides. The flow is:
//!
//! 1. `login::login` posts credentials and yields a pending `SessionRecord`
//!    holding only the email.
//! 2. `verification::verify_code` posts the one-time code, decodes the returned
//!    bearer token, and admits the session only for the `Admin` role.
//! 3. `session::save_session` persists the admitted record; `load_session`
//!    restores it on the next start.
//!
//! Nothing in here touches the browser, so the whole flow runs under native tests
//! against a scripted `AuthApi`.

pub mod api;
pub mod claims;
pub mod error;
pub mod login;
pub mod messages;
pub mod routes;
pub mod session;
pub mod types;
pub mod verification;

pub use api::AuthApi;
pub use claims::{Role, TokenClaims, decode_claims};
pub use error::{AppError, Error};
pub use routes::{AppRoute, paths};
pub use session::{
    DEFAULT_STORAGE_KEY, MemoryStorage, SessionRecord, SessionStorage, clear_session,
    load_session, save_session,
};
pub use verification::{
    AttemptState, VerificationAttempt, VerifyOutcome, is_valid_code, resend_code, verify_code,
};
