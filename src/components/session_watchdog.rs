//! Inactivity watchdog mounted for the lifetime of an authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` mounts this only while the session is resolved, so unmounting on
//! sign-out releases the listeners and the tick loop with it.

use leptos::prelude::*;

use crate::state::context::SessionContext;
use crate::util::inactivity::format_remaining;

/// Countdown badge; on expiry the session ends and sign-in is loaded.
#[component]
pub fn SessionWatchdog() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let remaining = RwSignal::new(ctx.config().inactivity_timeout.as_secs());

    #[cfg(feature = "hydrate")]
    {
        let expire_ctx = ctx.clone();
        let handle = crate::util::inactivity::WatchdogHandle::start(
            ctx.config().inactivity_timeout,
            move |secs| remaining.set(secs),
            move || expire_ctx.expire_for_inactivity(),
        );
        on_cleanup(move || handle.stop());
    }

    view! {
        <span class="session-watchdog" title="Tiempo restante antes de cerrar la sesión por inactividad">
            {move || format!("Sesión: {}", format_remaining(remaining.get()))}
        </span>
    }
}
