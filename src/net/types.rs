//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! round-trips stay lossless and the state stores can swallow responses
//! wholesale instead of picking fields apart.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Occupancy state of a single parking slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// Free and bookable.
    Available,
    /// Holds a vehicle.
    Occupied,
}

/// A parking slot as reported by `GET /api/parking/status`.
///
/// The backend owns every field; the client treats slots as read-only and
/// replaces the whole list on each refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot identifier (e.g. `"A1"`). Unique within the lot.
    pub slot_id: String,
    /// Current occupancy.
    pub status: SlotStatus,
    /// Vehicle parked in the slot, if occupied.
    pub vehicle_id: Option<String>,
    /// ISO 8601 timestamp of the active booking, if occupied.
    pub booked_at: Option<String>,
}

impl Slot {
    /// Whether this slot can currently be booked.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

/// The kind of action a history entry records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Book,
    Release,
}

/// An immutable record of a past booking or release.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// What happened.
    pub action: HistoryAction,
    /// Slot the action applied to.
    pub slot_id: String,
    /// Vehicle involved, if the backend recorded one.
    pub vehicle_id: Option<String>,
    /// ISO 8601 timestamp of the action.
    pub timestamp: String,
}

/// Response body of `GET /api/parking/status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub slots: Vec<Slot>,
    pub available_count: usize,
    pub total_count: usize,
}

/// Response body of `GET /api/parking/history`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<HistoryEntry>,
}

/// Response body of the booking/release mutations.
///
/// Extra fields the backend echoes back (`slot_id`, `booked_at`, …) are
/// intentionally not modeled; the client re-fetches server truth instead of
/// applying them optimistically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
}

/// Request body of `POST /api/parking/book`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRequest {
    pub slot_id: String,
    pub vehicle_id: String,
}

/// Request body of `POST /api/parking/release`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRequest {
    pub slot_id: String,
}

/// Minimal shape of a non-2xx error body; `message` is shown to the user
/// when present.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
