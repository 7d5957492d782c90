use super::*;

#[test]
fn default_config_matches_documented_constants() {
    let config = AdminConfig::default();
    assert_eq!(config.viewport_cap_fraction, 0.60);
    assert_eq!(config.notify_lifetime_ms, 5400);
    assert_eq!(config.success_close_delay_ms, 700);
    assert_eq!(config.inline_message_ms, 4000);
    assert_eq!(config.csrf_cookie, "csrftoken");
    assert_eq!(config.csrf_header, "X-CSRFToken");
}

#[test]
fn from_json_overrides_only_named_fields() {
    let config = AdminConfig::from_json(r#"{"notify_lifetime_ms": 1000, "record_noun": "vault"}"#).unwrap();
    assert_eq!(config.notify_lifetime_ms, 1000);
    assert_eq!(config.record_noun, "vault");
    assert_eq!(config.notify_exit_ms, DEFAULT_NOTIFY_EXIT_MS);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(AdminConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_non_object_json() {
    for raw in ["[0.5, 10]", "[1,2]", "42", "\"contract\"", "null"] {
        assert!(matches!(AdminConfig::from_json(raw), Err(ConfigError::Parse(_))), "{raw} accepted");
    }
}

#[test]
fn from_json_rejects_out_of_range_cap() {
    assert!(matches!(
        AdminConfig::from_json(r#"{"viewport_cap_fraction": 1.5}"#),
        Err(ConfigError::ViewportCap(_))
    ));
    assert!(matches!(
        AdminConfig::from_json(r#"{"viewport_cap_fraction": 0}"#),
        Err(ConfigError::ViewportCap(_))
    ));
}

#[test]
fn from_json_or_default_falls_back() {
    assert_eq!(AdminConfig::from_json_or_default(None), AdminConfig::default());
    assert_eq!(AdminConfig::from_json_or_default(Some("   ")), AdminConfig::default());
    assert_eq!(AdminConfig::from_json_or_default(Some("[1,2]")), AdminConfig::default());
}

#[test]
fn endpoint_for_joins_slug_once() {
    let mut config = AdminConfig::default();
    assert_eq!(config.endpoint_for("pause"), "/contract/pause/");
    config.endpoint_base = "/admin/contract".to_owned();
    assert_eq!(config.endpoint_for("set-fee-bps"), "/admin/contract/set-fee-bps/");
}
