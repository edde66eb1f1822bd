use super::*;

// =============================================================
// Endpoint construction
// =============================================================

#[test]
fn endpoint_prefixes_base_path() {
    assert_eq!(endpoint("/parking/status"), "/api/parking/status");
    assert_eq!(endpoint("/parking/history"), "/api/parking/history");
    assert_eq!(endpoint("/parking/book"), "/api/parking/book");
    assert_eq!(endpoint("/parking/release"), "/api/parking/release");
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn api_error_displays_server_message() {
    let err = ApiError::Api { status: 409, message: "Slot 'A1' is already occupied".to_owned() };
    assert_eq!(err.to_string(), "Slot 'A1' is already occupied");
}

#[test]
fn transport_error_displays_underlying_text() {
    let err = ApiError::Transport("Failed to fetch".to_owned());
    assert_eq!(err.to_string(), "Failed to fetch");
}

#[test]
fn request_failed_message_carries_status() {
    assert_eq!(request_failed_message(502), "Request failed (502)");
}
