use super::*;
use crate::net::types::SlotStatus;

fn available_slot() -> Slot {
    Slot { slot_id: "A1".to_owned(), status: SlotStatus::Available, vehicle_id: None, booked_at: None }
}

fn occupied_slot() -> Slot {
    Slot {
        slot_id: "B2".to_owned(),
        status: SlotStatus::Occupied,
        vehicle_id: Some("MH-01-AB-1234".to_owned()),
        booked_at: Some("2026-08-06T08:30:00".to_owned()),
    }
}

// =============================================================
// Badge projection
// =============================================================

#[test]
fn available_slot_gets_available_modifier_and_label() {
    let slot = available_slot();
    assert_eq!(status_modifier(&slot), "available");
    assert_eq!(status_label(&slot), "Available");
}

#[test]
fn occupied_slot_gets_occupied_modifier_and_label() {
    let slot = occupied_slot();
    assert_eq!(status_modifier(&slot), "occupied");
    assert_eq!(status_label(&slot), "Occupied");
}

// =============================================================
// Vehicle projection
// =============================================================

#[test]
fn vehicle_label_shows_vehicle_id() {
    assert_eq!(vehicle_label(&occupied_slot()), "MH-01-AB-1234");
}

#[test]
fn vehicle_label_falls_back_without_vehicle() {
    assert_eq!(vehicle_label(&available_slot()), "No vehicle");
}
