//! Request/response interceptor shared by every backend call.
//!
//! ARCHITECTURE
//! ============
//! Request phase attaches the stored bearer token. Response phase watches for
//! rejected credentials: outside the sign-in view it clears the token, drops
//! the in-memory session and forces a full navigation to sign-in. This is how
//! a token revoked or expired on the server is noticed mid-session.
//!
//! Nothing here retries.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use serde::{Serialize, de::DeserializeOwned};

use super::error::UNAUTHORIZED;
#[cfg(feature = "hydrate")]
use super::error::{AuthError, error_message_from_body};
use crate::state::token_store::SharedTokenStore;
use crate::util::navigation::{SharedNavigator, same_path};

/// What the response phase did with a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseAction {
    PassThrough,
    EndSession,
}

/// Decide the response-phase action for `status` seen while on `current_path`.
pub fn response_action(status: u16, current_path: &str, signin_path: &str) -> ResponseAction {
    if status == UNAUTHORIZED && !same_path(current_path, signin_path) {
        ResponseAction::EndSession
    } else {
        ResponseAction::PassThrough
    }
}

/// `Authorization` header value for a bearer token.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

type RejectionHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct Transport {
    store: SharedTokenStore,
    navigator: SharedNavigator,
    signin_path: String,
    on_rejected: Option<RejectionHook>,
    /// Set while a sign-in redirect is under way. Cleared again if the
    /// navigator could not start it, so the next rejection retries.
    redirecting: Arc<AtomicBool>,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("signin_path", &self.signin_path)
            .field("redirecting", &self.redirecting.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl Transport {
    pub fn new(store: SharedTokenStore, navigator: SharedNavigator, signin_path: impl Into<String>) -> Self {
        Self {
            store,
            navigator,
            signin_path: signin_path.into(),
            on_rejected: None,
            redirecting: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run `hook` whenever a rejected-credentials response ends the session.
    #[must_use]
    pub fn with_rejection_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_rejected = Some(Arc::new(hook));
        self
    }

    /// Header value for the currently stored token, if any.
    pub fn authorization(&self) -> Option<String> {
        self.store.get().map(|token| bearer_value(&token))
    }

    /// Response phase. Applies side effects for `status` and reports what it did.
    ///
    /// Concurrent rejections clear state each time but navigate only once.
    pub fn observe(&self, status: u16) -> ResponseAction {
        let action = response_action(status, &self.navigator.current_path(), &self.signin_path);
        if action == ResponseAction::EndSession {
            self.store.clear();
            if let Some(hook) = &self.on_rejected {
                hook();
            }
            if !self.redirecting.swap(true, Ordering::SeqCst) {
                leptos::logging::warn!("credentials rejected (status {status}); ending session");
                if !self.navigator.hard_redirect(&self.signin_path) {
                    self.redirecting.store(false, Ordering::SeqCst);
                }
            }
        }
        action
    }

    /// Request phase. Attaches `token`, or the stored token when `None`.
    #[cfg(feature = "hydrate")]
    pub fn authorize(
        &self,
        builder: gloo_net::http::RequestBuilder,
        token: Option<&str>,
    ) -> gloo_net::http::RequestBuilder {
        let header = token.map(bearer_value).or_else(|| self.authorization());
        match header {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    /// Send a built request and run the response phase on the result.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Network`] if no response was received.
    #[cfg(feature = "hydrate")]
    pub async fn send(&self, request: gloo_net::http::Request) -> Result<gloo_net::http::Response, AuthError> {
        let resp = request.send().await.map_err(|e| AuthError::Network(e.to_string()))?;
        self.observe(resp.status());
        Ok(resp)
    }

    /// Authenticated `GET` returning a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for transport failures, non-2xx statuses, or bad JSON.
    #[cfg(feature = "hydrate")]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AuthError> {
        let request = self
            .authorize(gloo_net::http::Request::get(url), None)
            .build()
            .map_err(|e| AuthError::Network(e.to_string()))?;
        read_json(self.send(request).await?).await
    }

    /// Authenticated `POST` with a JSON body, returning a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for transport failures, non-2xx statuses, or bad JSON.
    #[cfg(feature = "hydrate")]
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> Result<T, AuthError> {
        let request = self
            .authorize(gloo_net::http::Request::post(url), None)
            .json(body)
            .map_err(|e| AuthError::Network(e.to_string()))?;
        read_json(self.send(request).await?).await
    }
}

/// Map a response to its JSON body or a [`AuthError::Rejected`].
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] for non-2xx and [`AuthError::Decode`] for bad JSON.
#[cfg(feature = "hydrate")]
pub async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AuthError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::Rejected { status, message: error_message_from_body(&body) });
    }
    resp.json::<T>().await.map_err(|e| AuthError::Decode(e.to_string()))
}
