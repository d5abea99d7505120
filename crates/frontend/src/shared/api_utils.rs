//! API utilities for frontend-backend communication
//!
//! Provides URL construction, the common [`ApiError`] type and response
//! decoding shared by all API modules.

use super::config::config;
use contracts::usecases::u508_resume_chat::ErrorResponse;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// # Returns
/// - Configured backend origin like "http://127.0.0.1:8000"
pub fn api_base() -> String {
    config().api_base.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/api/upload/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("failed to build request: {0}")]
    Request(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}{}", message_suffix(.message))]
    Http {
        status: u16,
        /// `error` field of the response body, if the backend sent one
        message: Option<String>,
    },
}

impl ApiError {
    /// Human-readable message supplied by the backend, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}

/// Builds the error for a non-2xx response from its raw body.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .filter(|m| !m.is_empty());
    ApiError::Http { status, message }
}

/// Decodes a 2xx body; anything that is not the expected JSON yields the default.
pub fn decode_body<T: DeserializeOwned + Default>(body: &str) -> T {
    serde_json::from_str(body).unwrap_or_default()
}

/// Turns a settled response into the typed success body or an [`ApiError`].
pub async fn read_response<T: DeserializeOwned + Default>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !response.ok() {
        return Err(error_from_body(status, &body));
    }

    Ok(decode_body(&body))
}
