//! HTTP helpers for the user-account API with a consistent timeout and error
//! mapping. Feature clients use these helpers so request setup and the timeout
//! policy live in one place. Payloads may carry codes, passwords, or tokens;
//! nothing here logs a body.

use super::{AppError, config::AppConfig};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use tracing::debug;
use web_sys::{AbortController, AbortSignal, FormData};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Posts a JSON body and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    debug!(path, "POST json");

    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Accept", "*/*")
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts a multipart form and ignores the response body. The browser sets the
/// multipart `Content-Type` with its boundary, so it is not set by hand.
pub async fn post_form(path: &str, fields: &[(&str, &str)]) -> Result<(), AppError> {
    let url = build_url(path);
    let form = FormData::new()
        .map_err(|_| AppError::Serialization("Failed to create form data.".to_string()))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|_| AppError::Serialization(format!("Failed to encode field {name}.")))?;
    }
    debug!(path, "POST form");

    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Accept", "*/*")
            .abort_signal(Some(signal))
            .body(form)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and classifies HTTP errors.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(error_from_response(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::from_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::build_url_with_base;

    #[test]
    fn build_url_joins_without_duplicate_slashes() {
        assert_eq!(
            build_url_with_base("https://api.example/", "/api/user-account/login"),
            "https://api.example/api/user-account/login"
        );
        assert_eq!(
            build_url_with_base("  ", "/api/user-account/login"),
            "/api/user-account/login"
        );
    }
}
