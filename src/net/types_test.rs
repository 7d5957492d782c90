use super::*;

// =============================================================
// ActionResult::from_response
// =============================================================

#[test]
fn from_response_parses_success_body() {
    let result = ActionResult::from_response(200, r#"{"message":"Paused","tx_hash":"0xabc123"}"#);
    assert!(result.ok);
    assert!(!result.malformed);
    assert_eq!(result.body.message.as_deref(), Some("Paused"));
    assert_eq!(result.body.tx_hash.as_deref(), Some("0xabc123"));
}

#[test]
fn from_response_synthesizes_body_for_non_json() {
    let result = ActionResult::from_response(502, "<html>Bad Gateway</html>");
    assert!(!result.ok);
    assert!(result.malformed);
    assert_eq!(result.body, ResponseBody::invalid());
    assert_eq!(result.body.error.as_deref(), Some("Invalid server response"));
}

#[test]
fn from_response_treats_wrong_shape_as_malformed() {
    assert!(ActionResult::from_response(200, "[1,2,3]").malformed);
    assert!(ActionResult::from_response(200, r#"{"message": 5}"#).malformed);
    assert!(ActionResult::from_response(200, "").malformed);
}

#[test]
fn from_response_ignores_unknown_fields() {
    let result = ActionResult::from_response(200, r#"{"ok":true,"block":12}"#);
    assert!(!result.malformed);
    assert_eq!(result.body.ok, Some(true));
}

// =============================================================
// outcome classification
// =============================================================

#[test]
fn outcome_success_carries_message_and_tx() {
    let result = ActionResult::from_response(200, r#"{"message":"Paused","tx_hash":"0xabc...123"}"#);
    let success = result.outcome().unwrap();
    assert_eq!(success.message.as_deref(), Some("Paused"));
    assert_eq!(success.tx_hash.as_deref(), Some("0xabc...123"));
}

#[test]
fn outcome_prefers_error_over_message() {
    let result = ActionResult::from_response(400, r#"{"error":"Already paused","message":"ignored"}"#);
    assert_eq!(result.outcome(), Err(ActionFailure::Application("Already paused".to_owned())));
}

#[test]
fn outcome_falls_back_to_message_then_server_error() {
    let with_message = ActionResult::from_response(500, r#"{"message":"boom"}"#);
    assert_eq!(with_message.outcome(), Err(ActionFailure::Application("boom".to_owned())));

    let bare = ActionResult::from_response(500, r#"{"error":"  "}"#);
    assert_eq!(bare.outcome(), Err(ActionFailure::Application("Server error".to_owned())));
}

#[test]
fn outcome_malformed_success_is_protocol_failure() {
    let result = ActionResult::from_response(200, "not json");
    assert_eq!(result.outcome(), Err(ActionFailure::Protocol));
    assert_eq!(ActionFailure::Protocol.to_string(), "Invalid server response");
}

#[test]
fn outcome_uses_status_not_body_ok_flag() {
    let result = ActionResult::from_response(200, r#"{"ok":false,"message":"done anyway"}"#);
    assert!(result.outcome().is_ok());
}

// =============================================================
// ActionFailure text
// =============================================================

#[test]
fn failure_texts_match_operator_copy() {
    assert_eq!(ActionFailure::MissingEndpoint.to_string(), "No endpoint configured");
    assert_eq!(ActionFailure::Transport.to_string(), "Network error");
    assert_eq!(ActionFailure::Transport.notification_text(), "Network error - check your connection");
    assert_eq!(ActionFailure::Application("x".to_owned()).notification_text(), "x");
}

// =============================================================
// collect_payload
// =============================================================

#[test]
fn collect_payload_maps_checkbox_to_bool_and_text_to_string() {
    let payload = collect_payload(&[Field::text("name", "x"), Field::checkbox("active", true)]);
    assert_eq!(payload, serde_json::json!({"name": "x", "active": true}));
}

#[test]
fn collect_payload_skips_unnamed_controls() {
    let payload = collect_payload(&[Field::text("", "lost"), Field::text("fee_bps", "25")]);
    assert_eq!(payload, serde_json::json!({"fee_bps": "25"}));
}

#[test]
fn collect_payload_last_duplicate_wins() {
    let payload = collect_payload(&[Field::text("a", "1"), Field::text("a", "2")]);
    assert_eq!(payload, serde_json::json!({"a": "2"}));
}

#[test]
fn collect_payload_empty_form_is_empty_object() {
    assert_eq!(collect_payload(&[]), serde_json::json!({}));
}
