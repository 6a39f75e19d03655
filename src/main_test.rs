use super::*;

// =============================================================
// Retry hints
// =============================================================

#[test]
fn transient_backend_failures_get_a_retry_hint() {
    for err in [
        GatewayError::Response { status: 503, body: "maintenance".into() },
        GatewayError::Response { status: 429, body: String::new() },
        GatewayError::Request("timed out".into()),
        GatewayError::Unavailable("offline".into()),
    ] {
        assert_eq!(retry_hint(&CliError::Gateway(err)), Some("the backend may recover; run the save again"));
    }
}

#[test]
fn save_in_flight_has_its_own_hint() {
    let hint = retry_hint(&CliError::Gateway(GatewayError::SaveInFlight));
    assert_eq!(hint, Some("another save is still running; try again shortly"));
}

#[test]
fn permanent_failures_get_no_hint() {
    assert!(retry_hint(&CliError::Gateway(GatewayError::Response { status: 404, body: String::new() })).is_none());
    assert!(retry_hint(&CliError::Gateway(GatewayError::InvalidBaseUrl("ftp://x".into()))).is_none());
    assert!(retry_hint(&CliError::Doc(DocError::Empty)).is_none());
}
