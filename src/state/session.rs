//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and identity-aware components. Only the token is
//! persisted; the user identity lives here for the lifetime of the process.
//!
//! INVARIANT
//! =========
//! A user is present only together with the token it was validated against.
//! Fields are private and every constructor keeps both in step.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, UserIdentity};

/// Where boot-time resolution stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    /// Token not yet validated; consumers show a loading state.
    #[default]
    Pending,
    /// Token validated and user known.
    Resolved,
    /// No valid session.
    Unresolved,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<UserIdentity>,
    resolution: Resolution,
}

impl Session {
    /// Empty session at process start, before the token has been checked.
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn resolved(token: impl Into<String>, user: UserIdentity) -> Self {
        Self { token: Some(token.into()), user: Some(user), resolution: Resolution::Resolved }
    }

    pub fn unresolved() -> Self {
        Self { token: None, user: None, resolution: Resolution::Unresolved }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().map(|user| &user.role)
    }

    pub fn is_pending(&self) -> bool {
        self.resolution == Resolution::Pending
    }

    pub fn is_authenticated(&self) -> bool {
        self.resolution == Resolution::Resolved
    }
}
