use super::*;
use crate::net::types::FieldInput;

#[test]
fn scroll_target_places_element_below_container_top() {
    // container at 100, element at 340, already scrolled 50
    assert_eq!(scroll_target(100.0, 340.0, 50.0, 12.0), 278.0);
}

#[test]
fn scroll_target_never_negative() {
    assert_eq!(scroll_target(100.0, 105.0, 0.0, 12.0), 0.0);
}

#[test]
fn checkbox_control_carries_checked_state() {
    let field = control_field("allowed", "checkbox", "on".to_owned(), true);
    assert_eq!(field.input, FieldInput::Checkbox(true));
    let field = control_field("allowed", "CHECKBOX", "on".to_owned(), false);
    assert_eq!(field.input, FieldInput::Checkbox(false));
}

#[test]
fn other_controls_carry_string_value() {
    let field = control_field("fee_bps", "number", "25".to_owned(), false);
    assert_eq!(field.name, "fee_bps");
    assert_eq!(field.input, FieldInput::Text("25".to_owned()));
}

#[test]
fn server_host_measures_nothing() {
    #[cfg(not(feature = "hydrate"))]
    {
        let host = DomHost;
        assert_eq!(host.content_extent("anything"), None);
        assert_eq!(host.viewport_extent(), 0.0);
        assert!(collect_fields("form").is_empty());
        assert!(cookie("csrftoken").is_none());
    }
}
