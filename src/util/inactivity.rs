//! Inactivity watchdog.
//!
//! DESIGN
//! ======
//! [`IdleCountdown`] is a timestamp-driven state machine: interaction calls
//! `reset(now)`, a one-second interval calls `tick(now)`. Expiry is reported
//! once per idle period and re-armed only by the next reset.
//!
//! In the browser, [`WatchdogHandle`] owns the window listeners and the tick
//! loop. Dropping or stopping it releases both, so a remount never leaves an
//! old timer running.

#[cfg(test)]
#[path = "inactivity_test.rs"]
mod inactivity_test;

use std::time::Duration;

/// Window events that count as user activity.
pub const ACTIVITY_EVENTS: [&str; 5] = ["mousemove", "mousedown", "keydown", "touchstart", "scroll"];

/// Countdown refresh period.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleTick {
    /// Still counting; whole seconds left, rounded up.
    Counting { remaining_secs: u64 },
    /// Idle period just elapsed. Reported once.
    Expired,
    /// Already expired; waiting for activity.
    Spent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdleCountdown {
    timeout_ms: u64,
    last_activity_ms: u64,
    fired: bool,
}

impl IdleCountdown {
    pub fn new(timeout: Duration, now_ms: u64) -> Self {
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        Self { timeout_ms, last_activity_ms: now_ms, fired: false }
    }

    /// Restart the countdown from `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.last_activity_ms = now_ms;
        self.fired = false;
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        let idle = now_ms.saturating_sub(self.last_activity_ms);
        self.timeout_ms.saturating_sub(idle)
    }

    pub fn remaining_secs(&self, now_ms: u64) -> u64 {
        self.remaining_ms(now_ms).div_ceil(1000)
    }

    pub fn tick(&mut self, now_ms: u64) -> IdleTick {
        if self.fired {
            return IdleTick::Spent;
        }
        let remaining_ms = self.remaining_ms(now_ms);
        if remaining_ms == 0 {
            self.fired = true;
            IdleTick::Expired
        } else {
            IdleTick::Counting { remaining_secs: remaining_ms.div_ceil(1000) }
        }
    }
}

/// Render remaining seconds as `mm:ss`.
pub fn format_remaining(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(feature = "hydrate")]
fn now_ms() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let now = js_sys::Date::now().max(0.0) as u64;
    now
}

/// Live watchdog bound to the browser window.
#[cfg(feature = "hydrate")]
pub struct WatchdogHandle {
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
    listeners: Vec<leptos::prelude::WindowListenerHandle>,
}

#[cfg(feature = "hydrate")]
impl WatchdogHandle {
    /// Start counting down `timeout`.
    ///
    /// `on_tick` receives the remaining whole seconds each interval;
    /// `on_expire` runs once per idle period.
    pub fn start<T, E>(timeout: Duration, on_tick: T, on_expire: E) -> Self
    where
        T: Fn(u64) + 'static,
        E: Fn() + 'static,
    {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::{Arc, Mutex, PoisonError};

        let countdown = Arc::new(Mutex::new(IdleCountdown::new(timeout, now_ms())));
        let alive = Arc::new(AtomicBool::new(true));

        let listeners = ACTIVITY_EVENTS
            .iter()
            .map(|event| {
                let countdown = Arc::clone(&countdown);
                leptos::prelude::window_event_listener_untyped(event, move |_| {
                    countdown
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .reset(now_ms());
                })
            })
            .collect();
        log::debug!("inactivity watchdog armed for {}s", timeout.as_secs());

        let alive_task = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(TICK_INTERVAL).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let tick = countdown
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .tick(now_ms());
                match tick {
                    IdleTick::Counting { remaining_secs } => on_tick(remaining_secs),
                    IdleTick::Expired => {
                        on_tick(0);
                        on_expire();
                    }
                    IdleTick::Spent => {}
                }
            }
        });

        Self { alive, listeners }
    }

    /// Release listeners and end the tick loop.
    pub fn stop(self) {
        drop(self);
    }
}

#[cfg(feature = "hydrate")]
impl Drop for WatchdogHandle {
    fn drop(&mut self) {
        self.alive.store(false, std::sync::atomic::Ordering::Relaxed);
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
        log::debug!("inactivity watchdog released");
    }
}
