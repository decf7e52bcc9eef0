//! Helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decision logic lives here as plain functions so it can be tested without a
//! browser; browser bindings stay behind the `hydrate` feature.

pub mod guard;
pub mod inactivity;
pub mod navigation;
