//! Wire payloads for the user-account endpoints. Codes, passwords, and tokens
//! travel in these types, so they must never be logged.

use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/api/user-account/login";
pub const VERIFY_TWO_FACTOR_PATH: &str = "/api/user-account/verify-twofactor-code";
pub const RESEND_CODE_PATH: &str = "/api/user-account/resend-code";

/// Form field carrying the email on the resend endpoint.
pub const RESEND_EMAIL_FIELD: &str = "Email";

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub is_success: Option<bool>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeRequest {
    pub email: String,
    pub two_factor_code: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Multipart form sent to the resend endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResendCodeForm {
    pub email: String,
}

impl ResendCodeForm {
    /// Form entries in submission order.
    pub fn fields(&self) -> [(&'static str, &str); 1] {
        [(RESEND_EMAIL_FIELD, self.email.as_str())]
    }
}
