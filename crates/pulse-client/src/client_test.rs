use super::*;

fn test_client(base_url: &str) -> PulseClient {
    PulseClient::with_base_url(base_url, 30, "pulse-test/0.1", 0, 0)
        .expect("client construction should not fail")
}

#[test]
fn endpoint_appends_segments() {
    let client = test_client("http://localhost:8001");
    let url = client.endpoint(&["api", "health"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8001/api/health");
}

#[test]
fn endpoint_strips_trailing_slash() {
    let client = test_client("http://localhost:8001/");
    let url = client.endpoint(&["api", "data"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8001/api/data");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let client = test_client("https://example.com/pulse");
    let url = client.endpoint(&["api", "settings"]).unwrap();
    assert_eq!(url.as_str(), "https://example.com/pulse/api/settings");
}

#[test]
fn endpoint_percent_encodes_group_names() {
    let client = test_client("http://localhost:8001");
    let url = client.endpoint(&["api", "groups", "EV launches/2026"]).unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8001/api/groups/EV%20launches%2F2026"
    );
}

#[test]
fn rejects_non_http_base_url() {
    let result = PulseClient::with_base_url("ftp://example.com", 30, "ua", 0, 0);
    assert!(matches!(result, Err(ClientError::InvalidBaseUrl { .. })));
}

#[test]
fn rejects_unparseable_base_url() {
    let result = PulseClient::with_base_url("not a url", 30, "ua", 0, 0);
    assert!(matches!(result, Err(ClientError::InvalidBaseUrl { .. })));
}

#[test]
fn error_detail_prefers_detail_field() {
    assert_eq!(error_detail(r#"{"detail":"sheet not shared"}"#), "sheet not shared");
}

#[test]
fn error_detail_falls_back_to_body_excerpt() {
    let long = "x".repeat(500);
    assert_eq!(error_detail(&long).len(), MAX_DETAIL_CHARS);
    assert_eq!(error_detail("  Bad Gateway \n"), "Bad Gateway");
}
