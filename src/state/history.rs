//! Activity-history state for the dashboard feed.
//!
//! DESIGN
//! ======
//! The backend appends entries oldest-to-newest and the client keeps that
//! wire order; newest-first display is a projection, not a stored ordering.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::{HistoryEntry, HistoryResponse};

/// Last-known activity snapshot, replaced wholesale on each successful fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryState {
    pub entries: Vec<HistoryEntry>,
}

impl HistoryState {
    /// Overwrite the mirror with a fresh history payload.
    pub fn apply(&mut self, response: HistoryResponse) {
        self.entries = response.history;
    }

    /// Entries in display order: the exact reverse of the wire order.
    #[must_use]
    pub fn newest_first(&self) -> Vec<HistoryEntry> {
        self.entries.iter().rev().cloned().collect()
    }
}
