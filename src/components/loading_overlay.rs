//! Full-page loading overlay shown while a request is in flight.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Overlay bound to the shared loading flag. The flag is a plain boolean,
/// so an overlapping request hiding it early is possible; see `state::ui`.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().loading>
            <div class="loading-overlay">
                <div class="loading-overlay__spinner" aria-label="Loading"></div>
            </div>
        </Show>
    }
}
