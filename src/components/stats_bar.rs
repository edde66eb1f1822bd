//! Stat tiles for available/occupied/total counts with animated ramps.
//!
//! DESIGN
//! ======
//! Each tile owns its displayed value and ramps it toward the store's count
//! independently of the other tiles. A per-tile generation counter lets a
//! fresh target cancel a ramp that is still running.

use leptos::prelude::*;

use crate::state::slots::SlotsState;
#[cfg(feature = "hydrate")]
use crate::util::counter::{CounterAnimation, DURATION_MS, TICK_MS};

/// The three stat tiles above the grid.
#[component]
pub fn StatsBar() -> impl IntoView {
    let slots = expect_context::<RwSignal<SlotsState>>();

    let available = Memo::new(move |_| to_i64(slots.get().available_count));
    let occupied = Memo::new(move |_| to_i64(slots.get().occupied_count()));
    let total = Memo::new(move |_| to_i64(slots.get().total_count));

    view! {
        <div class="stats-bar">
            <StatTile label="Available" value=available modifier="available"/>
            <StatTile label="Occupied" value=occupied modifier="occupied"/>
            <StatTile label="Total Slots" value=total modifier="total"/>
        </div>
    }
}

/// One tile: a label plus a value that ramps to the target count.
#[component]
fn StatTile(label: &'static str, value: Memo<i64>, modifier: &'static str) -> impl IntoView {
    let displayed = RwSignal::new(value.get_untracked());

    #[cfg(feature = "hydrate")]
    {
        let generation = RwSignal::new(0u64);
        Effect::new(move || {
            let target = value.get();
            let start = displayed.get_untracked();
            let this_generation = generation.get_untracked() + 1;
            generation.set(this_generation);
            if start == target {
                return;
            }
            leptos::task::spawn_local(async move {
                let mut animation = CounterAnimation::new(start, target, DURATION_MS);
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(TICK_MS)).await;
                    if generation.get_untracked() != this_generation {
                        break;
                    }
                    let done = animation.step();
                    displayed.set(animation.display());
                    if done {
                        break;
                    }
                }
            });
        });
    }

    view! {
        <div class=format!("stats-bar__tile stats-bar__tile--{modifier}")>
            <span class="stats-bar__value">{move || displayed.get()}</span>
            <span class="stats-bar__label">{label}</span>
        </div>
    }
}

#[allow(clippy::cast_possible_wrap)]
fn to_i64(count: usize) -> i64 {
    count as i64
}
