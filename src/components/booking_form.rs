//! Booking form: available-slot dropdown plus vehicle input.

use leptos::prelude::*;

use crate::state::history::HistoryState;
use crate::state::slots::SlotsState;
use crate::state::toast::{Toast, ToastState};
use crate::state::ui::UiState;
use crate::sync;

/// Booking form. Validation happens before any request is built; on success
/// the fields clear and both mirrors re-sync.
#[component]
pub fn BookingForm() -> impl IntoView {
    let slots = expect_context::<RwSignal<SlotsState>>();
    let history = expect_context::<RwSignal<HistoryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let slot_id = RwSignal::new(String::new());
    let vehicle_id = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = sync::validate_booking(&slot_id.get(), &vehicle_id.get()) else {
            toast.update(|t| {
                t.show(Toast::warning(sync::MISSING_BOOKING_FIELDS));
            });
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if sync::book(request, slots, history, ui, toast).await {
                slot_id.set(String::new());
                vehicle_id.set(String::new());
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (request, history, ui);
    };

    view! {
        <form class="action-form" on:submit=on_submit>
            <label class="action-form__label">
                "Parking Slot"
                <select
                    class="action-form__select"
                    prop:value=move || slot_id.get()
                    on:change=move |ev| slot_id.set(event_target_value(&ev))
                >
                    <option value="">"Select a slot"</option>
                    {move || {
                        slots
                            .get()
                            .available_slots()
                            .into_iter()
                            .map(|slot| {
                                view! { <option value=slot.slot_id.clone()>{slot.slot_id.clone()}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <label class="action-form__label">
                "Vehicle ID"
                <input
                    class="action-form__input"
                    type="text"
                    placeholder="e.g. MH-01-AB-1234"
                    prop:value=move || vehicle_id.get()
                    on:input=move |ev| vehicle_id.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary action-form__submit" type="submit">
                "Book Slot"
            </button>
        </form>
    }
}
