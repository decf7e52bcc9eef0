//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Protected pages are wrapped in
//! `components::protected::Protected` by `app`; pages themselves never decide
//! access.

pub mod academy;
pub mod home;
pub mod signin;
