//! Gateway configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::GatewayError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LAYOUT_PATH: &str = "/api/venue/floor-plans";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Scheme and authority, no trailing slash.
    pub base_url: String,
    /// Always starts with `/`.
    pub layout_path: String,
    /// Sent as a bearer token when present.
    pub api_token: Option<String>,
    pub timeouts: Timeouts,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            layout_path: DEFAULT_LAYOUT_PATH.to_string(),
            api_token: None,
            timeouts: Timeouts::default(),
        }
    }
}

impl GatewayConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `VENUE_API_BASE_URL`: default `http://localhost:8000`
    /// - `VENUE_LAYOUT_PATH`: default `/api/venue/floor-plans`
    /// - `VENUE_API_TOKEN`: bearer token, none by default
    /// - `VENUE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `VENUE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidBaseUrl`] when the base URL is not http(s).
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GatewayConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidBaseUrl`] when the base URL is not http(s).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = normalize_base_url(lookup("VENUE_API_BASE_URL").as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let layout_path =
            normalize_path(lookup("VENUE_LAYOUT_PATH").as_deref().unwrap_or(DEFAULT_LAYOUT_PATH));
        let api_token = lookup("VENUE_API_TOKEN").map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        let timeouts = Timeouts {
            request_secs: parse_secs(lookup("VENUE_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_secs(lookup("VENUE_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { base_url, layout_path, api_token, timeouts })
    }

    /// Full URL layouts are saved to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.layout_path)
    }
}

/// Trim whitespace and trailing slashes; require an http(s) scheme.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidBaseUrl`] for any other scheme or an empty host.
pub fn normalize_base_url(raw: &str) -> Result<String, GatewayError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed.strip_prefix("http://").or_else(|| trimmed.strip_prefix("https://"));
    match host {
        Some(h) if !h.is_empty() => Ok(trimmed.to_string()),
        _ => Err(GatewayError::InvalidBaseUrl(raw.to_string())),
    }
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with('/') { trimmed.to_string() } else { format!("/{trimmed}") }
}

fn parse_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
