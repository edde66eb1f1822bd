//! Toast host: renders the current notification and schedules its dismissal.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Seconds a toast stays visible, regardless of severity.
pub const DISMISS_AFTER_SECS: u64 = 4;

/// Renders the single toast slot. Each shown toast arms a dismiss timer
/// carrying its sequence number; a timer that fires after the toast has been
/// replaced is a no-op.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        let last_armed = StoredValue::new(0u64);
        Effect::new(move || {
            let state = toast.get();
            if state.current.is_none() || last_armed.get_value() == state.seq {
                return;
            }
            last_armed.set_value(state.seq);
            let seq = state.seq;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
                toast.update(|t| t.dismiss(seq));
            });
        });
    }

    view! {
        <Show when=move || toast.get().current.is_some()>
            {move || {
                toast.get().current.map(|t| {
                    view! {
                        <div class=format!("toast {}", t.kind.css_class())>
                            <span class="toast__icon">{t.icon}</span>
                            <span class="toast__message">{t.message}</span>
                        </div>
                    }
                })
            }}
        </Show>
    }
}
