//! Top toolbar with the title and the manual refresh action.

use leptos::prelude::*;

use crate::state::history::HistoryState;
use crate::state::slots::SlotsState;
use crate::state::toast::{Toast, ToastState};
use crate::state::ui::UiState;
use crate::sync;

/// Header bar. Manual refresh triggers the same full re-sync the poll loop
/// uses and confirms with a toast.
#[component]
pub fn Toolbar() -> impl IntoView {
    let slots = expect_context::<RwSignal<SlotsState>>();
    let history = expect_context::<RwSignal<HistoryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let on_refresh = move |_| {
        sync::refresh_all(slots, history, ui, toast);
        toast.update(|t| {
            t.show(Toast::success(sync::DATA_REFRESHED).with_icon("🔄"));
        });
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"🅿️ ParkBoard"</span>
            <span class="toolbar__spacer"></span>
            <button class="btn toolbar__refresh" on:click=on_refresh title="Refresh data">
                "⟳ Refresh"
            </button>
        </header>
    }
}
