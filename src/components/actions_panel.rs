//! Actions panel with the Book/Release tab pair.

use leptos::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::components::release_form::ReleaseForm;
use crate::state::ui::{ActionTab, UiState};

/// Two-tab panel hosting the booking and release forms.
#[component]
pub fn ActionsPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="actions-panel">
            <div class="actions-panel__tabs">
                <button
                    class="tab-button"
                    class:tab-button--active=move || ui.get().active_tab == ActionTab::Book
                    on:click=move |_| ui.update(|u| u.active_tab = ActionTab::Book)
                >
                    "Book"
                </button>
                <button
                    class="tab-button"
                    class:tab-button--active=move || ui.get().active_tab == ActionTab::Release
                    on:click=move |_| ui.update(|u| u.active_tab = ActionTab::Release)
                >
                    "Release"
                </button>
            </div>
            <Show
                when=move || ui.get().active_tab == ActionTab::Book
                fallback=move || view! { <ReleaseForm/> }
            >
                <BookingForm/>
            </Show>
        </div>
    }
}
