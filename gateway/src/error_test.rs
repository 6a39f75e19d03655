use super::*;

#[test]
fn response_message_names_status_and_body() {
    let err = GatewayError::Response { status: 503, body: "  down for maintenance\n".into() };
    assert_eq!(err.to_string(), "backend returned status 503: down for maintenance");
}

#[test]
fn response_message_without_body() {
    let err = GatewayError::Response { status: 404, body: String::new() };
    assert_eq!(err.to_string(), "backend returned status 404: empty response body");
}

#[test]
fn response_message_truncates_long_body() {
    let err = GatewayError::Response { status: 500, body: "é".repeat(500) };
    let message = err.to_string();
    assert_eq!(message, format!("backend returned status 500: {}...", "é".repeat(200)));
    // Full body stays available on the variant.
    assert!(matches!(err, GatewayError::Response { ref body, .. } if body.chars().count() == 500));
}

#[test]
fn server_errors_and_throttling_are_retryable() {
    for status in [429, 500, 502, 503, 599] {
        assert!(GatewayError::Response { status, body: String::new() }.retryable(), "{status}");
    }
    assert!(GatewayError::Request("timed out".into()).retryable());
    assert!(GatewayError::Unavailable("offline".into()).retryable());
    assert!(GatewayError::SaveInFlight.retryable());
}

#[test]
fn client_errors_are_not_retryable() {
    for status in [400, 401, 404, 422] {
        assert!(!GatewayError::Response { status, body: String::new() }.retryable(), "{status}");
    }
    assert!(!GatewayError::InvalidBaseUrl("ftp://x".into()).retryable());
    assert!(!GatewayError::Encode("bad".into()).retryable());
    assert!(!GatewayError::HttpClientBuild("tls".into()).retryable());
}
