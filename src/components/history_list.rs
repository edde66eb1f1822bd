//! Activity feed rendered newest-first.

#[cfg(test)]
#[path = "history_list_test.rs"]
mod history_list_test;

use leptos::prelude::*;

use crate::net::types::{HistoryAction, HistoryEntry};
use crate::state::history::HistoryState;
use crate::util::time::format_timestamp;

/// The history feed; rows appear in reverse wire order.
#[component]
pub fn HistoryList() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();

    view! {
        <div class="history-list">
            <Show
                when=move || !history.get().entries.is_empty()
                fallback=|| view! { <p class="history-list__empty">"No recent activity"</p> }
            >
                {move || {
                    history
                        .get()
                        .newest_first()
                        .into_iter()
                        .map(|entry| view! { <HistoryRow entry=entry/> })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </div>
    }
}

/// One history row: action icon, summary, vehicle, relative time.
#[component]
fn HistoryRow(entry: HistoryEntry) -> impl IntoView {
    let icon_class = format!("history-item__icon history-item__icon--{}", action_modifier(entry.action));
    let summary = format!("{} - Slot {}", action_label(entry.action), entry.slot_id);
    let vehicle = format!("Vehicle: {}", vehicle_label(entry.vehicle_id.as_deref()));
    let time = format_timestamp(&entry.timestamp);

    view! {
        <div class="history-item">
            <div class=icon_class>{action_icon(entry.action)}</div>
            <div class="history-item__content">
                <div class="history-item__action">{summary}</div>
                <div class="history-item__info">{vehicle}</div>
            </div>
            <div class="history-item__time">{time}</div>
        </div>
    }
}

fn action_icon(action: HistoryAction) -> &'static str {
    match action {
        HistoryAction::Book => "🅿️",
        HistoryAction::Release => "🚪",
    }
}

fn action_label(action: HistoryAction) -> &'static str {
    match action {
        HistoryAction::Book => "Booked",
        HistoryAction::Release => "Released",
    }
}

fn action_modifier(action: HistoryAction) -> &'static str {
    match action {
        HistoryAction::Book => "book",
        HistoryAction::Release => "release",
    }
}

fn vehicle_label(vehicle_id: Option<&str>) -> String {
    vehicle_id.unwrap_or("N/A").to_owned()
}
