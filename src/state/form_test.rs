use super::*;

fn form() -> ActionForm {
    ActionForm::new(
        FormId::new("fn-fee"),
        Some("/contract/set-fee-bps/".to_owned()),
        Some(PanelId::new("contractCollapseNative")),
    )
}

fn open_form() -> ActionForm {
    let mut f = form();
    f.begin_open(120.0, false);
    f.finish_open();
    f
}

#[test]
fn new_form_is_closed_with_toggle_enabled() {
    let f = form();
    assert_eq!(f.phase, FormPhase::Closed);
    assert!(f.toggle_enabled());
    assert!(!f.submit_enabled());
    assert!(!f.cancel_enabled());
}

#[test]
fn blank_endpoint_is_treated_as_missing() {
    let f = ActionForm::new(FormId::new("f"), Some("  ".to_owned()), None);
    assert!(f.endpoint.is_none());
}

// =============================================================
// opening
// =============================================================

#[test]
fn open_without_waiting_goes_through_opening() {
    let mut f = form();
    assert!(f.begin_open(120.0, false));
    assert_eq!(f.phase, FormPhase::Opening { awaiting_panel: false });
    assert!(f.is_open());
    assert!(!f.toggle_enabled());
    assert!(f.finish_open());
    assert_eq!(f.phase, FormPhase::Open);
    assert_eq!(f.max_height, 120.0);
}

#[test]
fn parent_ready_resolves_once() {
    let mut f = form();
    f.begin_open(0.0, true);
    assert!(!f.finish_open());
    assert!(f.parent_ready(140.0));
    assert!(!f.parent_ready(999.0));
    assert_eq!(f.max_height, 140.0);
    assert!(f.finish_open());
}

#[test]
fn begin_open_rejected_unless_closed() {
    let mut f = open_form();
    assert!(!f.begin_open(10.0, false));
}

// =============================================================
// submitting
// =============================================================

#[test]
fn submit_guard_rejects_reentry() {
    let mut f = open_form();
    assert!(f.begin_submit());
    assert!(!f.begin_submit());
    assert!(!f.cancel_enabled());
    assert!(!f.submit_enabled());
}

#[test]
fn submit_rejected_while_closed() {
    let mut f = form();
    assert!(!f.begin_submit());
}

#[test]
fn failed_submit_returns_to_open() {
    let mut f = open_form();
    f.begin_submit();
    f.submit_failed();
    assert_eq!(f.phase, FormPhase::Open);
    assert!(f.submit_enabled());
}

// =============================================================
// closing
// =============================================================

#[test]
fn close_collapse_finish_sequence() {
    let mut f = open_form();
    assert!(f.begin_close(150.0));
    assert_eq!(f.max_height, 150.0);
    assert!(!f.is_open());
    f.collapse();
    assert_eq!(f.max_height, 0.0);
    assert!(f.finish_close());
    assert!(!f.finish_close());
    assert!(f.toggle_enabled());
}

#[test]
fn close_allowed_from_submitting_for_success_path() {
    let mut f = open_form();
    f.begin_submit();
    assert!(f.begin_close(100.0));
}

#[test]
fn close_rejected_while_opening() {
    let mut f = form();
    f.begin_open(10.0, true);
    assert!(!f.begin_close(10.0));
}

// =============================================================
// inline message
// =============================================================

#[test]
fn expire_only_clears_matching_message() {
    let mut f = open_form();
    let sending = f.set_message("Sending...", false);
    let done = f.set_message("Success", false);
    assert!(!f.expire_message(sending));
    assert_eq!(f.message.as_ref().unwrap().text, "Success");
    assert!(f.expire_message(done));
    assert!(f.message.is_none());
}

#[test]
fn remeasure_ignored_while_closed_or_waiting() {
    let mut f = form();
    assert!(!f.remeasure(50.0));
    f.begin_open(0.0, true);
    assert!(!f.remeasure(50.0));
    f.parent_ready(60.0);
    assert!(f.remeasure(80.0));
    assert_eq!(f.max_height, 80.0);
}
