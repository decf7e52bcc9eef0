//! Process-wide session context.
//!
//! ARCHITECTURE
//! ============
//! One `SessionContext` is built by `App` and provided through Leptos context.
//! It owns the session signal, the token slot, the HTTP transport and the
//! hard-navigation seam, and publishes every transition computed in
//! `state::resolver`. Components never reach for globals.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ConsoleConfig;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::error::AuthError;
use crate::net::transport::Transport;
use crate::net::types::{Credentials, UserIdentity};
use crate::state::resolver;
use crate::state::session::Session;
use crate::state::token_store::{BrowserTokenStore, SharedTokenStore};
use crate::util::navigation::{BrowserNavigator, SharedNavigator};

#[derive(Clone)]
pub struct SessionContext<A = HttpAuthApi> {
    pub session: RwSignal<Session>,
    config: Arc<ConsoleConfig>,
    store: SharedTokenStore,
    navigator: SharedNavigator,
    transport: Transport,
    api: A,
}

impl SessionContext {
    /// Context backed by `localStorage` and `window.location`.
    pub fn new(config: ConsoleConfig) -> Self {
        let store = Arc::new(BrowserTokenStore::new(config.token_storage_key.clone()));
        Self::with_parts(config, store, Arc::new(BrowserNavigator), HttpAuthApi::new)
    }
}

impl<A: AuthApi + Clone + 'static> SessionContext<A> {
    /// Wire a context from its parts. `build_api` receives the transport
    /// whose rejection hook drops this context's session.
    pub fn with_parts(
        config: ConsoleConfig,
        store: SharedTokenStore,
        navigator: SharedNavigator,
        build_api: impl FnOnce(&ConsoleConfig, Transport) -> A,
    ) -> Self {
        let session = RwSignal::new(Session::pending());
        let transport = Transport::new(Arc::clone(&store), Arc::clone(&navigator), config.signin_path.clone())
            .with_rejection_hook(move || session.set(Session::unresolved()));
        let api = build_api(&config, transport.clone());
        Self { session, config: Arc::new(config), store, navigator, transport, api }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Interceptor for other backend calls made by pages.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Boot-time resolution of the stored token.
    pub async fn resolve(&self) {
        let next = resolver::resolve(&self.api, self.store.as_ref()).await;
        self.session.set(next);
    }

    /// Sign in and publish the resulting session.
    ///
    /// # Errors
    ///
    /// Propagates the login failure; the session is left unresolved.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        match resolver::login(&self.api, self.store.as_ref(), credentials).await {
            Ok(session) => {
                let user = session.user().cloned();
                self.session.set(session);
                user.ok_or_else(|| AuthError::Decode("session without user".to_owned()))
            }
            Err(e) => {
                self.session.set(Session::unresolved());
                Err(e)
            }
        }
    }

    /// Sign out and leave for the sign-in page with a full reload.
    ///
    /// The backend is notified on a detached task; nothing waits for it.
    pub fn logout(&self) {
        let (next, token) = resolver::logout(self.store.as_ref());
        self.session.set(next);
        if let Some(token) = token {
            let api = self.api.clone();
            leptos::task::spawn_local(async move { resolver::notify_logout(&api, &token).await });
        }
        self.navigator.hard_redirect(&self.config.signin_path);
    }

    /// End the session after the inactivity timeout.
    pub fn expire_for_inactivity(&self) {
        leptos::logging::log!(
            "session closed after {}s without activity",
            self.config.inactivity_timeout.as_secs()
        );
        self.store.clear();
        self.session.set(Session::unresolved());
        self.navigator.hard_redirect(&self.config.signin_path);
    }
}
