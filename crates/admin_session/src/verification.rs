//! Two-factor verification: the step that turns a pending login into an admin
//! session. `verify_code` is the only producer of an admitted session record,
//! and every failure comes back as a displayable message instead of an error.

use crate::{
    api::AuthApi,
    claims::decode_claims,
    error::AppError,
    messages,
    session::SessionRecord,
    types::{ResendCodeForm, VerifyCodeRequest, VerifyCodeResponse},
};
use regex::Regex;
use tracing::{debug, info, warn};

/// Input pattern for one-time codes.
pub const CODE_PATTERN: &str = "[0-9]{6}";
pub const CODE_LENGTH: usize = 6;

pub fn is_valid_code(code: &str) -> bool {
    Regex::new(r"^[0-9]{6}$").is_ok_and(|re| re.is_match(code))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Server accepted the code and the token carries the Admin role.
    Admitted(SessionRecord),
    /// Server accepted the code but the role is not Admin.
    Denied,
    Failed(String),
}

impl VerifyOutcome {
    /// Message to render inline, `None` when the session was admitted.
    pub fn message(&self) -> Option<&str> {
        match self {
            VerifyOutcome::Admitted(_) => None,
            VerifyOutcome::Denied => Some(messages::ADMIN_ONLY),
            VerifyOutcome::Failed(message) => Some(message.as_str()),
        }
    }
}

/// Maps a request failure to its inline message. Server-provided messages win;
/// other transport failures use `transport_default`.
pub(crate) fn failure_message(err: &AppError, transport_default: &str) -> String {
    if let Some(message) = err.server_message() {
        return message.to_string();
    }
    if err.is_transport() {
        transport_default.to_string()
    } else {
        messages::UNKNOWN_ERROR.to_string()
    }
}

/// Returns the server message when it is present and non-empty.
pub(crate) fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|value| !value.is_empty())
}

/// Interprets a verification response for `email` at `now_unix` seconds.
/// Only a token the session guard would accept is admitted.
pub fn interpret_response(
    email: &str,
    response: VerifyCodeResponse,
    now_unix: i64,
) -> VerifyOutcome {
    if !response.is_success {
        return VerifyOutcome::Failed(
            non_empty(response.error_message).unwrap_or_else(|| messages::VERIFY_REJECTED.into()),
        );
    }

    let token = response.token.unwrap_or_default();
    let claims = match decode_claims(&token) {
        Ok(claims) => claims,
        Err(err) => {
            warn!("Verification succeeded with an unreadable token: {err}");
            return VerifyOutcome::Failed(messages::UNKNOWN_ERROR.to_string());
        }
    };

    if !claims.is_admin() {
        warn!("Verification succeeded for a non-admin account");
        return VerifyOutcome::Denied;
    }

    if claims.is_expired(now_unix) {
        warn!("Verification succeeded with an expired token");
        return VerifyOutcome::Failed(messages::TOKEN_EXPIRED.to_string());
    }

    VerifyOutcome::Admitted(SessionRecord {
        email: email.to_string(),
        token,
        refresh_token: response.refresh_token.unwrap_or_default(),
    })
}

/// Submits `code` for `email` and interprets the result against the caller's clock.
pub async fn verify_code<A: AuthApi + ?Sized>(
    api: &A,
    email: &str,
    code: &str,
    now_unix: i64,
) -> VerifyOutcome {
    let request = VerifyCodeRequest {
        email: email.to_string(),
        two_factor_code: code.to_string(),
    };
    debug!("Submitting two-factor code");

    let outcome = match api.verify_two_factor_code(&request).await {
        Ok(response) => interpret_response(email, response, now_unix),
        Err(err) => {
            warn!("Two-factor verification request failed: {err}");
            VerifyOutcome::Failed(failure_message(&err, messages::VERIFY_FAILED))
        }
    };

    if matches!(outcome, VerifyOutcome::Admitted(_)) {
        info!("Two-factor verification admitted an admin session");
    }
    outcome
}

/// Asks the server to send a fresh code. Returns the message to show on failure.
pub async fn resend_code<A: AuthApi + ?Sized>(api: &A, email: &str) -> Option<String> {
    let form = ResendCodeForm {
        email: email.to_string(),
    };
    info!("Requesting a new two-factor code");

    match api.resend_code(&form).await {
        Ok(()) => None,
        Err(err) => {
            warn!("Resend code request failed: {err}");
            Some(failure_message(&err, messages::RESEND_FAILED))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttemptState {
    #[default]
    Idle,
    Pending,
    Admitted,
}

/// Per-page submission state. Denied and failed submissions return to `Idle`
/// with `last_error` set; only `Admitted` is terminal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationAttempt {
    state: AttemptState,
    last_error: Option<String>,
}

impl VerificationAttempt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == AttemptState::Pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Starts a submission. Returns `false` and changes nothing while another
    /// submission is pending or after the session was admitted.
    pub fn begin(&mut self) -> bool {
        if self.state != AttemptState::Idle {
            return false;
        }
        self.state = AttemptState::Pending;
        self.last_error = None;
        true
    }

    /// Records the terminal outcome of the pending submission.
    pub fn finish(&mut self, outcome: &VerifyOutcome) {
        self.last_error = outcome.message().map(str::to_string);
        self.state = match outcome {
            VerifyOutcome::Admitted(_) => AttemptState::Admitted,
            VerifyOutcome::Denied | VerifyOutcome::Failed(_) => AttemptState::Idle,
        };
    }

    /// Sets an error without a round trip, e.g. a malformed code or a failed resend.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
