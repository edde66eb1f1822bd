//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components project the shared state stores into markup and forward user
//! intent to the `sync` orchestration layer; none of them mutate domain
//! state directly.

pub mod actions_panel;
pub mod booking_form;
pub mod history_list;
pub mod loading_overlay;
pub mod release_form;
pub mod slot_card;
pub mod slot_grid;
pub mod stats_bar;
pub mod toast;
pub mod toolbar;
