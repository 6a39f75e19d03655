use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// from_lookup
// =============================================================

#[test]
fn defaults_when_nothing_set() {
    let cfg = GatewayConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, GatewayConfig::default());
    assert_eq!(cfg.endpoint(), "http://localhost:8000/api/venue/floor-plans");
}

#[test]
fn overrides_are_applied() {
    let cfg = GatewayConfig::from_lookup(lookup_from(&[
        ("VENUE_API_BASE_URL", "https://venue.example.test/"),
        ("VENUE_LAYOUT_PATH", "layouts/"),
        ("VENUE_API_TOKEN", " tok-123 "),
        ("VENUE_REQUEST_TIMEOUT_SECS", "42"),
        ("VENUE_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://venue.example.test");
    assert_eq!(cfg.layout_path, "/layouts");
    assert_eq!(cfg.api_token.as_deref(), Some("tok-123"));
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.endpoint(), "https://venue.example.test/layouts");
}

#[test]
fn unparsable_timeouts_fall_back() {
    let cfg = GatewayConfig::from_lookup(lookup_from(&[
        ("VENUE_REQUEST_TIMEOUT_SECS", "soon"),
        ("VENUE_CONNECT_TIMEOUT_SECS", "0"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts, Timeouts::default());
}

#[test]
fn blank_token_is_none() {
    let cfg = GatewayConfig::from_lookup(lookup_from(&[("VENUE_API_TOKEN", "   ")])).unwrap();
    assert!(cfg.api_token.is_none());
}

#[test]
fn non_http_base_url_rejected() {
    let err = GatewayConfig::from_lookup(lookup_from(&[("VENUE_API_BASE_URL", "ftp://files.test")])).unwrap_err();
    assert!(matches!(err, GatewayError::InvalidBaseUrl(url) if url == "ftp://files.test"));
}

// =============================================================
// normalize_base_url
// =============================================================

#[test]
fn base_url_trailing_slashes_trimmed() {
    assert_eq!(normalize_base_url("http://localhost:8000///").unwrap(), "http://localhost:8000");
}

#[test]
fn base_url_without_host_rejected() {
    assert!(normalize_base_url("http://").is_err());
    assert!(normalize_base_url("").is_err());
    assert!(normalize_base_url("localhost:8000").is_err());
}
