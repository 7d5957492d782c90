use super::*;

// =============================================================
// show
// =============================================================

#[test]
fn show_prepends_most_recent_first() {
    let mut center = NotificationCenter::default();
    let first = center.show("one", NotifyKind::Info, NotifyOptions::default(), 0.0);
    let second = center.show("two", NotifyKind::Success, NotifyOptions::default(), 10.0);
    let ids: Vec<_> = center.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn show_assigns_default_title_by_kind() {
    let mut center = NotificationCenter::default();
    let info = center.show("m", NotifyKind::Info, NotifyOptions::default(), 0.0);
    let ok = center.show("m", NotifyKind::Success, NotifyOptions::default(), 0.0);
    let err = center.show("m", NotifyKind::Error, NotifyOptions::default(), 0.0);
    assert_eq!(center.get(info).unwrap().title, "Notice");
    assert_eq!(center.get(ok).unwrap().title, "Success");
    assert_eq!(center.get(err).unwrap().title, "Error");
}

#[test]
fn show_keeps_explicit_title_and_drops_empty_tx() {
    let mut center = NotificationCenter::default();
    let options = NotifyOptions { title: Some("Wallet".to_owned()), tx_hash: Some(String::new()), sticky: true };
    let id = center.show("m", NotifyKind::Info, options, 42.0);
    let n = center.get(id).unwrap();
    assert_eq!(n.title, "Wallet");
    assert!(n.tx_ref.is_none());
    assert!(n.sticky);
    assert_eq!(n.created_at_ms, 42.0);
    assert_eq!(n.phase, NotifyPhase::Entering);
}

#[test]
fn reveal_moves_entering_to_shown() {
    let mut center = NotificationCenter::default();
    let id = center.show("m", NotifyKind::Info, NotifyOptions::default(), 0.0);
    center.reveal(id);
    assert!(center.get(id).unwrap().is_shown());
}

// =============================================================
// dismiss / detach
// =============================================================

#[test]
fn dismiss_twice_is_noop_second_time() {
    let mut center = NotificationCenter::default();
    let id = center.show("m", NotifyKind::Info, NotifyOptions::default(), 0.0);
    assert!(center.dismiss(id));
    assert!(!center.dismiss(id));
    assert_eq!(center.get(id).unwrap().phase, NotifyPhase::Leaving);
}

#[test]
fn dismiss_unknown_leaves_stack_unchanged() {
    let mut center = NotificationCenter::default();
    let id = center.show("m", NotifyKind::Info, NotifyOptions::default(), 0.0);
    assert!(!center.dismiss(NotificationId(999)));
    assert!(!center.detach(NotificationId(999)));
    assert_eq!(center.len(), 1);
    assert_eq!(center.get(id).unwrap().phase, NotifyPhase::Entering);
}

#[test]
fn leaving_notification_is_not_revealed_again() {
    let mut center = NotificationCenter::default();
    let id = center.show("m", NotifyKind::Info, NotifyOptions::default(), 0.0);
    center.dismiss(id);
    center.reveal(id);
    assert_eq!(center.get(id).unwrap().phase, NotifyPhase::Leaving);
}

#[test]
fn detach_removes_only_target() {
    let mut center = NotificationCenter::default();
    let a = center.show("a", NotifyKind::Info, NotifyOptions::default(), 0.0);
    let b = center.show("b", NotifyKind::Info, NotifyOptions::default(), 0.0);
    assert!(center.detach(a));
    assert!(center.get(a).is_none());
    assert!(center.get(b).is_some());
    assert!(!center.detach(a));
}

// =============================================================
// transaction reference
// =============================================================

#[test]
fn elide_middle_keeps_short_values() {
    assert_eq!(elide_middle("0xabc...123", 40), "0xabc...123");
}

#[test]
fn elide_middle_truncates_long_hash() {
    let tx = format!("0x{}", "ab".repeat(32));
    let shown = elide_middle(&tx, 40);
    assert_eq!(shown.len(), 43);
    assert!(shown.starts_with(&tx[..20]));
    assert!(shown.ends_with(&tx[tx.len() - 20..]));
    assert!(shown.contains("..."));
}

#[test]
fn elide_middle_counts_characters_not_bytes() {
    assert_eq!(elide_middle("ééééé", 4), "éé...éé");
}

#[test]
fn copy_tx_returns_full_value_and_marks_copied() {
    let mut center = NotificationCenter::default();
    let tx = format!("0x{}", "f".repeat(64));
    let id = center.show("m", NotifyKind::Success, NotifyOptions::with_tx(Some(tx.clone())), 0.0);
    assert_eq!(center.copy_tx(id), Some(tx));
    assert!(center.get(id).unwrap().copied);
    center.reset_copied(id);
    assert!(!center.get(id).unwrap().copied);
}

#[test]
fn copy_tx_without_reference_is_none() {
    let mut center = NotificationCenter::default();
    let id = center.show("m", NotifyKind::Success, NotifyOptions::default(), 0.0);
    assert_eq!(center.copy_tx(id), None);
    assert!(!center.get(id).unwrap().copied);
}
