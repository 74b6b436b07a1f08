use serde::Deserialize;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Failures raised while talking to the remote API.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    /// Error response whose body carried a server-provided `errorMessage`.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error_message: Option<String>,
}

impl AppError {
    /// Classifies a non-2xx response. A JSON body with a non-empty
    /// `errorMessage` becomes `Api`; anything else is a sanitized `Http`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error_message)
            .filter(|message| !message.trim().is_empty());

        match server_message {
            Some(message) => AppError::Api { status, message },
            None => AppError::Http {
                status,
                message: sanitize_body(body),
            },
        }
    }

    /// Message the server asked us to show, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Api { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// True for failures of the request itself, as opposed to local bugs.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Network(_)
                | AppError::Timeout(_)
                | AppError::Http { .. }
                | AppError::Api { .. }
                | AppError::Parse(_)
        )
    }
}

/// Trims and truncates HTTP error bodies before they reach the UI.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

/// Local decoding and storage failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid token format")]
    TokenFormat,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn from_response_prefers_server_error_message() {
        let err = AppError::from_response(400, r#"{"errorMessage":"Mã không đúng"}"#);
        assert_eq!(
            err,
            AppError::Api {
                status: 400,
                message: "Mã không đúng".to_string()
            }
        );
        assert_eq!(err.server_message(), Some("Mã không đúng"));
    }

    #[test]
    fn from_response_ignores_blank_error_message() {
        let err = AppError::from_response(500, r#"{"errorMessage":"  "}"#);
        assert!(matches!(err, AppError::Http { status: 500, .. }));
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn from_response_sanitizes_plain_bodies() {
        let long = "x".repeat(500);
        match AppError::from_response(502, &long) {
            AppError::Http { message, .. } => assert_eq!(message.chars().count(), 200),
            other => panic!("unexpected error: {other:?}"),
        }

        match AppError::from_response(502, "   ") {
            AppError::Http { message, .. } => assert_eq!(message, "Request failed."),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn local_failures_are_not_transport() {
        assert!(!AppError::Config("missing".to_string()).is_transport());
        assert!(!AppError::Serialization("bad".to_string()).is_transport());
        assert!(AppError::Timeout("slow".to_string()).is_transport());
    }
}
