//! Networking modules for the auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the auth REST calls, `transport` intercepts every request and
//! response, `types` defines the wire schema and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
