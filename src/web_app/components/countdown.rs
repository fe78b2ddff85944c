// web_app/components/countdown.rs - Countdown display
//
// Re-renders once a second in the browser until the target passes, then
// shows "EXPIRED" and stops ticking. The server renders the state at
// request time.

use leptos::prelude::*;

use crate::web_app::model::{parse_countdown_target, CountdownState};

/// Text shown once the countdown has run out
pub const EXPIRED_TEXT: &str = "EXPIRED";

/// Countdown to `target` (RFC 3339 or naive UTC timestamp)
#[component]
pub fn Countdown(
    /// Target instant as written in the page
    target: String,
) -> impl IntoView {
    let parsed = parse_countdown_target(&target);
    if parsed.is_none() {
        log::warn!("Unreadable countdown target {:?}, showing it as expired", target);
    }

    let state_at_now = move || match parsed {
        Some(target) => CountdownState::at(target, chrono::Utc::now()),
        None => CountdownState::Expired,
    };
    let state = RwSignal::new(state_at_now());

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::Interval;

        use crate::web_app::model::COUNTDOWN_TICK_MS;

        // Started while running, dropped (and thereby cancelled) on expiry
        let ticker = Rc::new(RefCell::new(None::<Interval>));
        Effect::new(move || {
            if state.get().is_expired() {
                ticker.borrow_mut().take();
            } else if ticker.borrow().is_none() {
                let tick = Interval::new(COUNTDOWN_TICK_MS, move || state.set(state_at_now()));
                *ticker.borrow_mut() = Some(tick);
            }
        });
    }

    view! {
        <div data-countdown=target.clone() class="flex flex-wrap justify-center gap-4 sm:gap-6">
            {move || {
                let current = state.get();
                if current.is_expired() {
                    view! {
                        <div class="countdown-box text-3xl sm:text-4xl font-bold text-white">{EXPIRED_TEXT}</div>
                    }
                    .into_any()
                } else {
                    current
                        .fields()
                        .into_iter()
                        .map(|(value, label)| view! {
                            <div class="countdown-box">
                                <div class="text-3xl sm:text-4xl font-bold text-white">{value}</div>
                                <div class="text-sm text-gray-200 mt-2">{label}</div>
                            </div>
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
