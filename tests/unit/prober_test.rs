//! Tests for health probing

use guardian::core::models::{HealthCheck, HealthState};
use guardian::core::ports::RequestOptions;
use guardian::core::services::HealthProber;

use crate::common::mocks::MockTransport;

const UI: &str = "https://ui.example/health";

fn probe(transport: &MockTransport, url: Option<&str>, check: HealthCheck) -> HealthState {
    HealthProber::new(transport, RequestOptions::default()).probe("UI_HEALTH", url, check)
}

#[test]
fn healthy_body_with_success_status() {
    let transport = MockTransport::new().respond(UI, 200, "System Healthy");
    let state = probe(&transport, Some(UI), HealthCheck::BodyToken);

    assert!(state.ok);
    assert_eq!(state.status_code, Some(200));
    assert_eq!(state.report_line("UI"), "UI: https://ui.example/health code=200 ok=true");
}

#[test]
fn server_error_is_unhealthy() {
    let transport = MockTransport::new().respond(UI, 500, "ok");
    let state = probe(&transport, Some(UI), HealthCheck::BodyToken);

    assert!(!state.ok);
    assert_eq!(state.status_code, Some(500));
    assert_eq!(state.detail, "HTTP 500");
}

#[test]
fn success_without_token_is_unhealthy() {
    let transport = MockTransport::new().respond(UI, 200, "<html>maintenance</html>");
    let state = probe(&transport, Some(UI), HealthCheck::BodyToken);

    assert!(!state.ok);
    assert_eq!(state.detail, "no health token in body");
}

#[test]
fn reachable_check_ignores_body() {
    let transport = MockTransport::new().respond("https://api.example/whoami", 200, "");
    let state = probe(&transport, Some("https://api.example/whoami"), HealthCheck::Reachable);
    assert!(state.ok);
}

#[test]
fn redirect_is_reachable() {
    let transport = MockTransport::new().respond("https://api.example/whoami", 302, "");
    let state = probe(&transport, Some("https://api.example/whoami"), HealthCheck::Reachable);
    assert!(state.ok);
}

#[test]
fn missing_url_is_not_configured_and_not_requested() {
    let transport = MockTransport::new();
    let state = probe(&transport, None, HealthCheck::BodyToken);

    assert!(!state.ok);
    assert!(!state.configured);
    assert!(state.detail.contains("not configured"));
    assert_eq!(
        state.report_line("UI"),
        "UI: - code=none ok=false detail=no UI_HEALTH (not configured)"
    );
    assert!(transport.calls().is_empty());
}

#[test]
fn transport_failure_has_no_code() {
    let transport = MockTransport::new().fail(UI, "dns error");
    let state = probe(&transport, Some(UI), HealthCheck::BodyToken);

    assert!(!state.ok);
    assert!(state.configured);
    assert_eq!(state.status_code, None);
    assert_eq!(state.detail, "dns error");
}
