//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components enact session decisions (route gating, denial, inactivity)
//! while reading the shared `SessionContext` from Leptos context.

pub mod access_denied;
pub mod protected;
pub mod session_watchdog;
