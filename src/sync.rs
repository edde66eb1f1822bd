//! Poll/refresh driver and action-handler orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that talks to the backend funnels through here: the shared
//! request wrapper (loading overlay + error surfacing), the refresh
//! operations the poll loop and the toolbar trigger, and the booking/release
//! submissions. State stores are overwritten only on success; any failure
//! leaves the last-known-good mirror in place.
//!
//! Within one refresh the status and history fetches run as independent
//! unordered tasks; either may land first and briefly show a mixed view.
//! There is no request de-duplication or cancellation: a slow poll that is
//! superseded still applies its result when it completes.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{BookRequest, ReleaseRequest};
use crate::state::history::HistoryState;
use crate::state::slots::SlotsState;
use crate::state::toast::{Toast, ToastState};
use crate::state::ui::UiState;

/// Fixed poll interval. Not adaptive, not cancelable, no overlap guard.
pub const POLL_INTERVAL_SECS: u64 = 30;

/// Warning shown when the booking form is submitted incomplete.
pub const MISSING_BOOKING_FIELDS: &str = "Please fill in all fields";

/// Warning shown when the release form is submitted without a slot.
pub const MISSING_RELEASE_SLOT: &str = "Please select a slot";

/// Toast shown after a manual refresh.
pub const DATA_REFRESHED: &str = "Data refreshed";

/// Build a booking request from raw form fields.
///
/// Returns `None` when either trimmed field is empty; nothing is sent in
/// that case.
#[must_use]
pub fn validate_booking(slot_id: &str, vehicle_id: &str) -> Option<BookRequest> {
    let slot_id = slot_id.trim();
    let vehicle_id = vehicle_id.trim();
    if slot_id.is_empty() || vehicle_id.is_empty() {
        return None;
    }
    Some(BookRequest { slot_id: slot_id.to_owned(), vehicle_id: vehicle_id.to_owned() })
}

/// Build a release request from the raw slot field.
#[must_use]
pub fn validate_release(slot_id: &str) -> Option<ReleaseRequest> {
    let slot_id = slot_id.trim();
    if slot_id.is_empty() {
        return None;
    }
    Some(ReleaseRequest { slot_id: slot_id.to_owned() })
}

/// Run one API call with the loading overlay shown for its whole duration.
///
/// The overlay is hidden again on success and failure alike. Failures are
/// logged to the console, surfaced as an error toast, and swallowed into
/// `None` so callers keep their state untouched.
async fn request<T>(
    ui: RwSignal<UiState>,
    toast: RwSignal<ToastState>,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Option<T> {
    ui.update(|u| u.loading = true);
    let result = call.await;
    ui.update(|u| u.loading = false);

    match result {
        Ok(value) => Some(value),
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::error!("parking API error: {err}");
            toast.update(|t| {
                t.show(Toast::error(err.to_string()));
            });
            None
        }
    }
}

/// Fetch `/parking/status` and overwrite the slot mirror on success.
pub async fn refresh_status(slots: RwSignal<SlotsState>, ui: RwSignal<UiState>, toast: RwSignal<ToastState>) {
    let Some(response) = request(ui, toast, api::fetch_status()).await else {
        return;
    };
    if response.success {
        slots.update(|s| s.apply(response));
    }
}

/// Fetch `/parking/history` and overwrite the history mirror on success.
pub async fn refresh_history(history: RwSignal<HistoryState>, ui: RwSignal<UiState>, toast: RwSignal<ToastState>) {
    let Some(response) = request(ui, toast, api::fetch_history()).await else {
        return;
    };
    if response.success {
        history.update(|h| h.apply(response));
    }
}

/// Trigger one full refresh: status and history as independent tasks, in no
/// guaranteed order relative to each other.
pub fn refresh_all(
    slots: RwSignal<SlotsState>,
    history: RwSignal<HistoryState>,
    ui: RwSignal<UiState>,
    toast: RwSignal<ToastState>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            refresh_status(slots, ui, toast).await;
        });
        leptos::task::spawn_local(async move {
            refresh_history(history, ui, toast).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (slots, history, ui, toast);
    }
}

/// Submit a validated booking.
///
/// On success shows the server's message as a success toast and re-syncs
/// both mirrors. Returns `true` so the form can clear its fields; failure
/// surfacing already happened in the request wrapper.
pub async fn book(
    request_body: BookRequest,
    slots: RwSignal<SlotsState>,
    history: RwSignal<HistoryState>,
    ui: RwSignal<UiState>,
    toast: RwSignal<ToastState>,
) -> bool {
    let Some(response) = request(ui, toast, api::book_slot(&request_body)).await else {
        return false;
    };
    if !response.success {
        return false;
    }
    toast.update(|t| {
        t.show(Toast::success(response.message));
    });
    refresh_all(slots, history, ui, toast);
    true
}

/// Submit a validated release. Same success/failure pattern as [`book`].
pub async fn release(
    request_body: ReleaseRequest,
    slots: RwSignal<SlotsState>,
    history: RwSignal<HistoryState>,
    ui: RwSignal<UiState>,
    toast: RwSignal<ToastState>,
) -> bool {
    let Some(response) = request(ui, toast, api::release_slot(&request_body)).await else {
        return false;
    };
    if !response.success {
        return false;
    }
    toast.update(|t| {
        t.show(Toast::success(response.message));
    });
    refresh_all(slots, history, ui, toast);
    true
}
