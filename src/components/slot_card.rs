//! Card component for a single parking slot in the grid.

#[cfg(test)]
#[path = "slot_card_test.rs"]
mod slot_card_test;

use leptos::prelude::*;

use crate::net::types::Slot;
use crate::util::time::format_timestamp;

/// One slot card: id, occupancy badge, and either a booking affordance or
/// the parked vehicle with a relative booking time.
#[component]
pub fn SlotCard(slot: Slot) -> impl IntoView {
    let is_available = slot.is_available();
    let badge_class = format!("slot-card__badge slot-card__badge--{}", status_modifier(&slot));
    let badge_label = status_label(&slot);
    let vehicle = vehicle_label(&slot);
    let time_label = slot.booked_at.as_deref().map(format_timestamp).unwrap_or_default();
    let has_time = !time_label.is_empty();

    view! {
        <div
            class="slot-card"
            class:slot-card--available=is_available
            class:slot-card--occupied=!is_available
        >
            <div class="slot-card__header">
                <span class="slot-card__id">{slot.slot_id.clone()}</span>
                <span class=badge_class>{badge_label}</span>
            </div>
            <div class="slot-card__details">
                {if is_available {
                    view! { <div class="slot-card__ready">"✓ Ready to book"</div> }.into_any()
                } else {
                    view! {
                        <>
                            <div class="slot-card__vehicle">{format!("🚗 {vehicle}")}</div>
                            <Show when=move || has_time>
                                <div class="slot-card__time">{format!("⏰ {time_label}")}</div>
                            </Show>
                        </>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

fn status_modifier(slot: &Slot) -> &'static str {
    if slot.is_available() { "available" } else { "occupied" }
}

fn status_label(slot: &Slot) -> &'static str {
    if slot.is_available() { "Available" } else { "Occupied" }
}

fn vehicle_label(slot: &Slot) -> String {
    slot.vehicle_id.clone().unwrap_or_else(|| "No vehicle".to_owned())
}
