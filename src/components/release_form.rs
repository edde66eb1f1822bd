//! Release form: occupied-slot dropdown with the parked vehicle.

#[cfg(test)]
#[path = "release_form_test.rs"]
mod release_form_test;

use leptos::prelude::*;

use crate::net::types::Slot;
use crate::state::history::HistoryState;
use crate::state::slots::SlotsState;
use crate::state::toast::{Toast, ToastState};
use crate::state::ui::UiState;
use crate::sync;

/// Release form. Only the slot field exists; it clears on success.
#[component]
pub fn ReleaseForm() -> impl IntoView {
    let slots = expect_context::<RwSignal<SlotsState>>();
    let history = expect_context::<RwSignal<HistoryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let slot_id = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = sync::validate_release(&slot_id.get()) else {
            toast.update(|t| {
                t.show(Toast::warning(sync::MISSING_RELEASE_SLOT));
            });
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if sync::release(request, slots, history, ui, toast).await {
                slot_id.set(String::new());
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (request, history, ui);
    };

    view! {
        <form class="action-form" on:submit=on_submit>
            <label class="action-form__label">
                "Occupied Slot"
                <select
                    class="action-form__select"
                    prop:value=move || slot_id.get()
                    on:change=move |ev| slot_id.set(event_target_value(&ev))
                >
                    <option value="">"Select a slot"</option>
                    {move || {
                        slots
                            .get()
                            .occupied_slots()
                            .into_iter()
                            .map(|slot| {
                                view! { <option value=slot.slot_id.clone()>{option_label(&slot)}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <button class="btn btn--danger action-form__submit" type="submit">
                "Release Slot"
            </button>
        </form>
    }
}

fn option_label(slot: &Slot) -> String {
    let vehicle = slot.vehicle_id.as_deref().unwrap_or("N/A");
    format!("{} - {vehicle}", slot.slot_id)
}
