//! Per-route access decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route declares an [`AccessRequirement`]. `decide` is pure
//! and evaluated on each render; `components::protected` enacts the result
//! (loading view, client-side redirect, denial page, or the route itself).
//!
//! This is a UX gate only. The backend enforces authorization on its own.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::{Resolution, Session};
use crate::util::navigation::same_path;

/// Route parameters that may carry the requested academy id, in lookup order.
///
/// Pages disagree on the parameter name: generic entity pages use `id`,
/// academy-scoped pages use `academiaId`. The first one present wins. When
/// neither is present the ownership check does not apply.
pub const RESOURCE_ID_PARAMS: [&str; 2] = ["id", "academiaId"];

/// Route-attached access policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessRequirement {
    /// Empty means any authenticated role.
    pub allowed_roles: Vec<Role>,
    pub requires_ownership: bool,
}

impl AccessRequirement {
    /// Any signed-in principal.
    pub fn authenticated() -> Self {
        Self::default()
    }

    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self { allowed_roles: roles.into_iter().collect(), requires_ownership: false }
    }

    /// Also require the principal to own the requested academy.
    #[must_use]
    pub fn owning(mut self) -> Self {
        self.requires_ownership = true;
        self
    }

    pub fn admits_role(&self, role: &Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(role)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session still resolving; render a loading state.
    Loading,
    RedirectToSignIn,
    Deny,
    Allow,
}

/// Resolve the requested resource id from route params.
///
/// `lookup` returns the value of a named parameter; empty values are skipped.
pub fn requested_resource_id<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    RESOURCE_ID_PARAMS
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.is_empty()))
}

/// Decide access for `session` against `requirement`. First matching rule wins.
pub fn decide(session: &Session, requirement: &AccessRequirement, requested_resource_id: Option<&str>) -> Decision {
    match session.resolution() {
        Resolution::Pending => return Decision::Loading,
        Resolution::Unresolved => return Decision::RedirectToSignIn,
        Resolution::Resolved => {}
    }
    let Some(user) = session.user() else {
        return Decision::RedirectToSignIn;
    };

    if !requirement.admits_role(&user.role) {
        return Decision::Deny;
    }

    if requirement.requires_ownership {
        if let Some(requested) = requested_resource_id {
            let owns = user.role == Role::Admin || user.owned_resource_id.as_deref() == Some(requested);
            if !owns {
                return Decision::Deny;
            }
        }
    }

    Decision::Allow
}

/// Whether a decision should navigate to sign-in from `current_path`.
pub fn should_redirect(decision: Decision, current_path: &str, signin_path: &str) -> bool {
    decision == Decision::RedirectToSignIn && !same_path(current_path, signin_path)
}
