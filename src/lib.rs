//! # torneo-console
//!
//! Leptos + WASM administration console for a youth-soccer tournament.
//!
//! This crate holds the session and authorization layer the console pages sit
//! on: the persisted bearer token, boot-time session resolution, per-route
//! access guards, the inactivity watchdog and the HTTP interceptor. Entity
//! pages (academies, teams, coaches, delegates, players) build on
//! `state::context::SessionContext` and `net::transport::Transport`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
