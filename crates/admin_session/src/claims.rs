//! Bearer token claim decoding. Only the payload segment is read; the signature
//! is never checked here because the API remains the authority on every call.
//! Decoded claims must not be logged.

use crate::error::Error;
use base64ct::{Base64UrlUnpadded, Encoding};
use serde_json::{Map, Value};

/// Claim key the identity backend uses for the principal's role.
pub const ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";
/// Claim key for the principal's email address.
pub const EMAIL_CLAIM: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";

const ADMIN_ROLE: &str = "Admin";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    /// Any other value, kept verbatim. Non-string claim values land here as
    /// their JSON text.
    Unrecognized(String),
}

impl Role {
    fn from_claim(value: &Value) -> Self {
        match value {
            Value::String(role) if role == ADMIN_ROLE => Role::Admin,
            Value::String(role) => Role::Unrecognized(role.clone()),
            other => Role::Unrecognized(other.to_string()),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenClaims {
    pub role: Option<Role>,
    pub email: Option<String>,
    /// `exp` in unix seconds.
    pub expires_at: Option<i64>,
}

impl TokenClaims {
    pub fn is_admin(&self) -> bool {
        self.role.as_ref().is_some_and(Role::is_admin)
    }

    /// Tokens without `exp` never expire client-side.
    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now_unix)
    }
}

/// Decodes the claims of a bearer token. The payload is the second
/// dot-separated segment; whatever follows it is ignored.
pub fn decode_claims(token: &str) -> Result<TokenClaims, Error> {
    let payload = token
        .trim()
        .split('.')
        .nth(1)
        .filter(|payload| !payload.is_empty())
        .ok_or(Error::TokenFormat)?;

    let bytes = Base64UrlUnpadded::decode_vec(payload.trim_end_matches('='))
        .map_err(|_| Error::Base64)?;
    let claims: Map<String, Value> = serde_json::from_slice(&bytes)?;

    Ok(TokenClaims {
        role: claims.get(ROLE_CLAIM).map(Role::from_claim),
        email: claims
            .get(EMAIL_CLAIM)
            .and_then(Value::as_str)
            .map(str::to_string),
        expires_at: claims.get("exp").and_then(expiry_seconds),
    })
}

/// `exp` is a NumericDate and may carry a fraction.
fn expiry_seconds(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|seconds| seconds.floor() as i64))
}
