use super::*;
use crate::net::types::HistoryAction;

fn entry(action: HistoryAction, slot: &str, ts: &str) -> HistoryEntry {
    HistoryEntry {
        action,
        slot_id: slot.to_owned(),
        vehicle_id: Some("V-1".to_owned()),
        timestamp: ts.to_owned(),
    }
}

// =============================================================
// Replacement
// =============================================================

#[test]
fn default_state_is_empty() {
    assert!(HistoryState::default().entries.is_empty());
}

#[test]
fn apply_replaces_previous_entries() {
    let mut state = HistoryState::default();
    state.apply(HistoryResponse {
        success: true,
        history: vec![entry(HistoryAction::Book, "A1", "t1")],
    });
    state.apply(HistoryResponse {
        success: true,
        history: vec![entry(HistoryAction::Release, "B1", "t2")],
    });
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].slot_id, "B1");
}

// =============================================================
// Display projection
// =============================================================

#[test]
fn newest_first_reverses_wire_order() {
    let mut state = HistoryState::default();
    state.apply(HistoryResponse {
        success: true,
        history: vec![
            entry(HistoryAction::Book, "A1", "t1"),
            entry(HistoryAction::Book, "B1", "t2"),
            entry(HistoryAction::Release, "A1", "t3"),
        ],
    });
    let slots: Vec<_> = state.newest_first().into_iter().map(|e| e.timestamp).collect();
    assert_eq!(slots, vec!["t3", "t2", "t1"]);
}

#[test]
fn newest_first_leaves_stored_order_untouched() {
    let mut state = HistoryState::default();
    state.apply(HistoryResponse {
        success: true,
        history: vec![entry(HistoryAction::Book, "A1", "t1"), entry(HistoryAction::Book, "B1", "t2")],
    });
    let _ = state.newest_first();
    assert_eq!(state.entries[0].timestamp, "t1");
}
