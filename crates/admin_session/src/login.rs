//! Primary email/password step. A successful login only records the email; the
//! session stays unauthenticated until the two-factor step admits it.

use crate::{
    api::AuthApi,
    messages,
    session::SessionRecord,
    types::LoginRequest,
    verification::{failure_message, non_empty},
};
use tracing::{info, warn};

/// Submits credentials. On success returns the pending record to persist.
pub async fn login<A: AuthApi + ?Sized>(
    api: &A,
    email: &str,
    password: &str,
) -> Result<SessionRecord, String> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(messages::LOGIN_FIELDS_REQUIRED.to_string());
    }

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    match api.login(&request).await {
        Ok(response) if response.is_success != Some(false) => {
            info!("Primary login accepted, awaiting two-factor code");
            Ok(SessionRecord::pending(email))
        }
        Ok(response) => {
            Err(non_empty(response.error_message).unwrap_or_else(|| messages::LOGIN_FAILED.into()))
        }
        Err(err) => {
            warn!("Login request failed: {err}");
            Err(failure_message(&err, messages::LOGIN_FAILED))
        }
    }
}
