//! Session transitions: boot-time resolution, login and logout.
//!
//! ```text
//!            no token
//! Pending ─────────────────────────────► Unresolved
//!    │  identity check fails (token cleared)   ▲
//!    │──────────────────────────────────────────┘
//!    │  identity check succeeds
//!    └────────────────────────────────► Resolved(user)
//! ```
//!
//! Each function returns the next [`Session`] and performs the token-store
//! writes that go with it; the caller publishes the session. Logout is local
//! and synchronous; telling the backend is a separate best-effort call the
//! caller detaches. Nothing here retries.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::net::api::AuthApi;
use crate::net::error::AuthError;
use crate::net::types::Credentials;
use crate::state::session::Session;
use crate::state::token_store::TokenStore;

/// Exchange the stored token for the current identity.
///
/// Makes no network call when no token is stored. Any failure discards the
/// stored token.
pub async fn resolve<A: AuthApi>(api: &A, store: &dyn TokenStore) -> Session {
    let Some(token) = store.get() else {
        return Session::unresolved();
    };
    match api.fetch_identity(&token).await {
        Ok(envelope) => {
            let token = if envelope.token.trim().is_empty() || envelope.token == token {
                token
            } else {
                store.set(&envelope.token);
                envelope.token
            };
            Session::resolved(token, envelope.user)
        }
        Err(e) => {
            if e.is_unauthorized() {
                leptos::logging::warn!("stored token rejected; discarding it");
            } else {
                leptos::logging::warn!("session check failed: {e}; discarding stored token");
            }
            store.clear();
            Session::unresolved()
        }
    }
}

/// Exchange credentials for a token and identity.
///
/// # Errors
///
/// Propagates the backend error, or [`AuthError::Decode`] when the success
/// envelope carries no token. The store is cleared on every failure.
pub async fn login<A: AuthApi>(api: &A, store: &dyn TokenStore, credentials: &Credentials) -> Result<Session, AuthError> {
    let envelope = match api.login(credentials).await {
        Ok(envelope) => envelope,
        Err(e) => {
            leptos::logging::warn!("login failed for '{}': {e}", credentials.username);
            store.clear();
            return Err(e);
        }
    };
    if envelope.token.trim().is_empty() {
        store.clear();
        return Err(AuthError::Decode("login response without token".to_owned()));
    }
    store.set(&envelope.token);
    Ok(Session::resolved(envelope.token, envelope.user))
}

/// Clear local session state.
///
/// Returns the signed-out session and the token that was in use, if any, so
/// the caller can hand it to [`notify_logout`].
pub fn logout(store: &dyn TokenStore) -> (Session, Option<String>) {
    let token = store.get();
    if token.is_some() {
        store.clear();
    }
    (Session::unresolved(), token)
}

/// Tell the backend that `token` is no longer in use.
///
/// Best effort: a failure is logged, not returned.
pub async fn notify_logout<A: AuthApi>(api: &A, token: &str) {
    if let Err(e) = api.logout(token).await {
        leptos::logging::warn!("logout notification failed: {e}");
    }
}
