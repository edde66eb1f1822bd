//! Grid of slot cards with an empty-inventory fallback.

use leptos::prelude::*;

use crate::components::slot_card::SlotCard;
use crate::state::slots::SlotsState;

/// The slot grid; re-renders wholesale whenever the mirror is replaced.
#[component]
pub fn SlotGrid() -> impl IntoView {
    let slots = expect_context::<RwSignal<SlotsState>>();

    view! {
        <div class="slot-grid">
            <Show
                when=move || !slots.get().slots.is_empty()
                fallback=|| view! { <p class="slot-grid__empty">"No parking slots available"</p> }
            >
                {move || {
                    slots
                        .get()
                        .slots
                        .into_iter()
                        .map(|slot| {
                            ::leptos::component::component_view(
                                &SlotCard,
                                ::leptos::component::component_props_builder(&SlotCard)
                                    .slot(slot)
                                    .build(),
                            )
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </div>
    }
}
