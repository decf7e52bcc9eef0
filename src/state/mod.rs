//! Session state and its transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `token_store` is the single persisted source of truth, `session` the
//! in-memory view of it, `resolver` the transitions between states, and
//! `context` the singleton that publishes them to components.

pub mod context;
pub mod resolver;
pub mod session;
pub mod token_store;
