use super::*;

// =============================================================
// Booking validation
// =============================================================

#[test]
fn booking_with_both_fields_builds_trimmed_request() {
    let request = validate_booking("  A1 ", " KA-01-AB-1234  ").unwrap();
    assert_eq!(request.slot_id, "A1");
    assert_eq!(request.vehicle_id, "KA-01-AB-1234");
}

#[test]
fn booking_with_empty_vehicle_builds_no_request() {
    assert_eq!(validate_booking("A1", ""), None);
    assert_eq!(validate_booking("A1", "   "), None);
}

#[test]
fn booking_with_empty_slot_builds_no_request() {
    assert_eq!(validate_booking("", "KA-01"), None);
    assert_eq!(validate_booking("   ", "KA-01"), None);
}

// =============================================================
// Release validation
// =============================================================

#[test]
fn release_with_slot_builds_trimmed_request() {
    let request = validate_release(" B2 ").unwrap();
    assert_eq!(request.slot_id, "B2");
}

#[test]
fn release_without_slot_builds_no_request() {
    assert_eq!(validate_release(""), None);
    assert_eq!(validate_release("  "), None);
}

// =============================================================
// Warning copy
// =============================================================

#[test]
fn validation_messages_match_dashboard_copy() {
    assert_eq!(MISSING_BOOKING_FIELDS, "Please fill in all fields");
    assert_eq!(MISSING_RELEASE_SLOT, "Please select a slot");
    assert_eq!(DATA_REFRESHED, "Data refreshed");
}
