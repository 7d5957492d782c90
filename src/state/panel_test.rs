use super::*;

fn panel() -> Panel {
    Panel::new(PanelId::new("contractCollapseNative"), 0.60)
}

fn measure(content: f64) -> Measure {
    Measure { content, viewport: 1000.0 }
}

// =============================================================
// open
// =============================================================

#[test]
fn open_short_content_clips_at_content_height() {
    let mut p = panel();
    assert!(p.open(measure(300.0)));
    assert_eq!(p.phase, PanelPhase::Opening);
    assert_eq!(p.max_height, 300.0);
    assert_eq!(p.overflow, Overflow::Clip);
    assert!(p.is_open());
}

#[test]
fn open_tall_content_caps_and_scrolls() {
    let mut p = panel();
    p.open(measure(900.0));
    assert_eq!(p.max_height, 600.0);
    assert_eq!(p.measured_height, 900.0);
    assert_eq!(p.overflow, Overflow::Scroll);
}

#[test]
fn cap_is_floored_to_whole_pixels() {
    let mut p = panel();
    p.open(Measure { content: 500.0, viewport: 333.0 });
    assert_eq!(p.max_height, 199.0);
    assert_eq!(p.overflow, Overflow::Scroll);
}

#[test]
fn open_content_equal_to_cap_does_not_scroll() {
    let mut p = panel();
    p.open(measure(600.0));
    assert_eq!(p.overflow, Overflow::Clip);
}

#[test]
fn open_twice_is_rejected() {
    let mut p = panel();
    assert!(p.open(measure(100.0)));
    assert!(!p.open(measure(100.0)));
}

// =============================================================
// close / settle
// =============================================================

#[test]
fn close_starts_from_full_extent_then_collapses() {
    let mut p = panel();
    p.open(measure(900.0));
    p.settle();
    assert!(p.close(measure(900.0)));
    assert_eq!(p.phase, PanelPhase::Closing);
    assert_eq!(p.max_height, 900.0);
    // overflow is only reset once the transition completes
    assert_eq!(p.overflow, Overflow::Scroll);
    p.collapse();
    assert_eq!(p.max_height, 0.0);
    assert_eq!(p.settle(), Some(PanelPhase::Closed));
    assert_eq!(p.overflow, Overflow::Clip);
    assert!(!p.is_visible());
}

#[test]
fn close_when_closed_is_noop() {
    let mut p = panel();
    assert!(!p.close(measure(100.0)));
    assert_eq!(p.phase, PanelPhase::Closed);
}

#[test]
fn settle_is_idempotent() {
    let mut p = panel();
    p.open(measure(100.0));
    assert_eq!(p.settle(), Some(PanelPhase::Open));
    assert_eq!(p.settle(), None);
    assert_eq!(p.phase, PanelPhase::Open);
}

#[test]
fn collapse_outside_closing_keeps_extent() {
    let mut p = panel();
    p.open(measure(200.0));
    p.collapse();
    assert_eq!(p.max_height, 200.0);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_alternates_between_opening_and_closing() {
    let mut p = panel();
    assert_eq!(p.toggle(measure(100.0)), Some(PanelPhase::Opening));
    assert_eq!(p.toggle(measure(100.0)), Some(PanelPhase::Closing));
    // mid-close toggle reopens
    assert_eq!(p.toggle(measure(100.0)), Some(PanelPhase::Opening));
}

// =============================================================
// remeasure
// =============================================================

#[test]
fn remeasure_tracks_viewport_changes() {
    let mut p = panel();
    p.open(measure(500.0));
    assert_eq!(p.overflow, Overflow::Clip);
    assert!(p.remeasure(Measure { content: 500.0, viewport: 700.0 }));
    assert_eq!(p.max_height, 420.0);
    assert_eq!(p.overflow, Overflow::Scroll);
}

#[test]
fn remeasure_closed_panel_is_noop() {
    let mut p = panel();
    assert!(!p.remeasure(measure(500.0)));
    assert_eq!(p.max_height, 0.0);
}

#[test]
fn new_open_panel_accepts_first_remeasure() {
    let mut p = Panel::new_open(PanelId::new("x"), 0.60);
    assert!(p.is_open());
    assert!(p.remeasure(measure(250.0)));
    assert_eq!(p.max_height, 250.0);
}

#[test]
fn overflow_css_values() {
    assert_eq!(Overflow::Clip.css(), "hidden");
    assert_eq!(Overflow::Scroll.css(), "auto");
}
