use super::*;
use crate::net::types::SlotStatus;

fn slot(id: &str, status: SlotStatus, vehicle: Option<&str>) -> Slot {
    Slot {
        slot_id: id.to_owned(),
        status,
        vehicle_id: vehicle.map(str::to_owned),
        booked_at: vehicle.map(|_| "2026-08-06T08:30:00".to_owned()),
    }
}

fn sample_state() -> SlotsState {
    let mut state = SlotsState::default();
    state.apply(StatusResponse {
        success: true,
        slots: vec![
            slot("A1", SlotStatus::Available, None),
            slot("A2", SlotStatus::Occupied, Some("MH-01-AB-1234")),
            slot("B1", SlotStatus::Available, None),
            slot("B2", SlotStatus::Occupied, Some("KA-05-XY-9876")),
            slot("C1", SlotStatus::Available, None),
        ],
        available_count: 3,
        total_count: 5,
    });
    state
}

// =============================================================
// Defaults and wholesale replacement
// =============================================================

#[test]
fn default_state_is_empty() {
    let state = SlotsState::default();
    assert!(state.slots.is_empty());
    assert_eq!(state.available_count, 0);
    assert_eq!(state.total_count, 0);
    assert_eq!(state.occupied_count(), 0);
}

#[test]
fn apply_replaces_previous_inventory() {
    let mut state = sample_state();
    state.apply(StatusResponse {
        success: true,
        slots: vec![slot("Z9", SlotStatus::Occupied, Some("V-1"))],
        available_count: 0,
        total_count: 1,
    });
    assert_eq!(state.slots.len(), 1);
    assert_eq!(state.slots[0].slot_id, "Z9");
    assert_eq!(state.available_count, 0);
    assert_eq!(state.total_count, 1);
}

// =============================================================
// Counters
// =============================================================

#[test]
fn occupied_count_is_total_minus_available() {
    let state = sample_state();
    assert_eq!(state.occupied_count(), 2);
}

#[test]
fn occupied_count_saturates_on_inconsistent_counters() {
    let mut state = SlotsState::default();
    state.available_count = 4;
    state.total_count = 2;
    assert_eq!(state.occupied_count(), 0);
}

#[test]
fn rendered_partition_matches_reported_counters() {
    let state = sample_state();
    assert_eq!(state.available_slots().len(), state.available_count);
    assert_eq!(state.occupied_slots().len(), state.total_count - state.available_count);
}

// =============================================================
// Dropdown subsets
// =============================================================

#[test]
fn available_slots_is_exactly_the_available_subset() {
    let state = sample_state();
    let ids: Vec<_> = state.available_slots().into_iter().map(|s| s.slot_id).collect();
    assert_eq!(ids, vec!["A1", "B1", "C1"]);
}

#[test]
fn occupied_slots_keep_their_vehicle_ids() {
    let state = sample_state();
    let pairs: Vec<_> = state
        .occupied_slots()
        .into_iter()
        .map(|s| (s.slot_id, s.vehicle_id.unwrap()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("A2".to_owned(), "MH-01-AB-1234".to_owned()),
            ("B2".to_owned(), "KA-05-XY-9876".to_owned()),
        ]
    );
}
