//! Gateway error type.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Longest slice of a response body quoted in an error message.
const BODY_EXCERPT_CHARS: usize = 200;

/// Errors produced while saving a layout.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The configured base URL is not an http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The snapshot could not be serialized.
    #[error("encoding layout failed: {0}")]
    Encode(String),

    /// The request never produced a response (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}: {}", body_excerpt(body))]
    Response { status: u16, body: String },

    /// The backend is unreachable or refused the save outright.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// A save is already running for this editor.
    #[error("a save is already in progress")]
    SaveInFlight,
}

impl GatewayError {
    /// Whether trying the same save again later could succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::Request(_) | Self::Unavailable(_) | Self::SaveInFlight | Self::Response { status: 429 | 500..=599, .. }
        )
    }
}


/// Trimmed, length-capped response body for display.
fn body_excerpt(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "empty response body".into();
    }
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
