use super::*;

#[test]
fn generate_endpoint_formats_expected_path() {
    assert_eq!(
        generate_endpoint(DEFAULT_API_BASE),
        "http://127.0.0.1:8000/api/generate/"
    );
}

#[test]
fn regenerate_and_export_endpoints_format_expected_paths() {
    assert_eq!(regenerate_endpoint("http://x/api"), "http://x/api/regenerate/");
    assert_eq!(export_endpoint("http://x/api"), "http://x/api/export/");
}

#[test]
fn recent_kits_endpoint_includes_limit() {
    assert_eq!(
        recent_kits_endpoint("http://x/api", 5),
        "http://x/api/kits/recent/?limit=5"
    );
}

#[test]
fn kit_detail_endpoint_includes_id() {
    assert_eq!(kit_detail_endpoint("http://x/api", 42), "http://x/api/kits/42/");
}

#[test]
fn health_endpoint_formats_expected_path() {
    assert_eq!(health_endpoint("http://x/api"), "http://x/api/health/");
}

#[test]
fn normalized_base_strips_trailing_slash_and_whitespace() {
    assert_eq!(
        normalized_base(" http://host/api/ "),
        Some("http://host/api".to_owned())
    );
}

#[test]
fn normalized_base_rejects_blank_overrides() {
    assert_eq!(normalized_base(""), None);
    assert_eq!(normalized_base("   "), None);
    assert_eq!(normalized_base("/"), None);
}

#[test]
fn export_failed_message_formats_status() {
    assert_eq!(export_failed_message(502), "export request failed: 502");
}
