//! Local UI chrome state (loading overlay, action tabs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`slots`,
//! `history`). The loading flag is a plain boolean shown/hidden around each
//! request; overlapping requests are not counted, so a second in-flight call
//! can hide the overlay early. Accepted, not corrected.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs available in the actions panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionTab {
    #[default]
    Book,
    Release,
}

/// UI state for the loading overlay and the active actions tab.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub loading: bool,
    pub active_tab: ActionTab,
}
