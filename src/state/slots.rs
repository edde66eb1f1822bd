//! Slot-inventory state for the grid, counters, and form dropdowns.
//!
//! DESIGN
//! ======
//! Holds the last successful `/parking/status` payload verbatim. There is no
//! diffing and no client-side invariant enforcement; counts come from the
//! backend, with occupancy derived as `total - available`.

#[cfg(test)]
#[path = "slots_test.rs"]
mod slots_test;

use crate::net::types::{Slot, StatusResponse};

/// Last-known slot inventory, replaced wholesale on each successful fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotsState {
    pub slots: Vec<Slot>,
    pub available_count: usize,
    pub total_count: usize,
}

impl SlotsState {
    /// Overwrite the mirror with a fresh status payload.
    pub fn apply(&mut self, response: StatusResponse) {
        self.slots = response.slots;
        self.available_count = response.available_count;
        self.total_count = response.total_count;
    }

    /// Occupied count as reported counters imply.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.total_count.saturating_sub(self.available_count)
    }

    /// Slots the booking dropdown offers.
    #[must_use]
    pub fn available_slots(&self) -> Vec<Slot> {
        self.slots.iter().filter(|slot| slot.is_available()).cloned().collect()
    }

    /// Slots the release dropdown offers, each paired with its vehicle.
    #[must_use]
    pub fn occupied_slots(&self) -> Vec<Slot> {
        self.slots.iter().filter(|slot| !slot.is_available()).cloned().collect()
    }
}
