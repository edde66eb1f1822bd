//! Dashboard page: stat tiles, slot grid, action forms, and activity feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It kicks off the initial re-sync on mount and
//! runs the fixed-interval poll loop for the lifetime of the page. Polls
//! fire regardless of any request still in flight; there is deliberately no
//! overlap guard or backoff.

use leptos::prelude::*;

use crate::components::actions_panel::ActionsPanel;
use crate::components::history_list::HistoryList;
use crate::components::loading_overlay::LoadingOverlay;
use crate::components::slot_grid::SlotGrid;
use crate::components::stats_bar::StatsBar;
use crate::components::toast::ToastHost;
use crate::components::toolbar::Toolbar;
use crate::state::history::HistoryState;
use crate::state::slots::SlotsState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::sync;

/// Dashboard page — grid, counters, forms, and history, kept fresh by the
/// poll loop.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let slots = expect_context::<RwSignal<SlotsState>>();
    let history = expect_context::<RwSignal<HistoryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    // Initial load.
    let requested_initial = RwSignal::new(false);
    Effect::new(move || {
        if requested_initial.get() {
            return;
        }
        requested_initial.set(true);
        sync::refresh_all(slots, history, ui, toast);
    });

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(sync::POLL_INTERVAL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                sync::refresh_all(slots, history, ui, toast);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="dashboard-page">
            <Toolbar/>
            <StatsBar/>
            <main class="dashboard-page__main">
                <section class="dashboard-page__slots">
                    <h2>"Parking Slots"</h2>
                    <SlotGrid/>
                </section>
                <aside class="dashboard-page__side">
                    <ActionsPanel/>
                    <section class="dashboard-page__history">
                        <h2>"Recent Activity"</h2>
                        <HistoryList/>
                    </section>
                </aside>
            </main>
            <ToastHost/>
            <LoadingOverlay/>
        </div>
    }
}
