//! REST helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through
//! [`Transport`] so the bearer header and the rejected-credentials handling
//! apply uniformly.
//! Server-side (SSR) and native builds: every call fails with
//! [`AuthError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::error::AuthError;
use super::transport::Transport;
use super::types::{AuthEnvelope, Credentials};
use crate::config::ConsoleConfig;

pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Backend operations the session layer depends on.
pub trait AuthApi {
    /// `GET /api/auth/me` with `token` as bearer credential.
    fn fetch_identity(&self, token: &str) -> impl Future<Output = Result<AuthEnvelope, AuthError>>;

    /// `POST /api/auth/login` with `{ username, password }`.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<AuthEnvelope, AuthError>>;

    /// `POST /api/auth/logout` with `token` as bearer credential.
    fn logout(&self, token: &str) -> impl Future<Output = Result<(), AuthError>>;
}

/// [`AuthApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
    transport: Transport,
}

impl HttpAuthApi {
    pub fn new(config: &ConsoleConfig, transport: Transport) -> Self {
        Self { base_url: config.api_base_url.clone(), transport }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl AuthApi for HttpAuthApi {
    async fn fetch_identity(&self, token: &str) -> Result<AuthEnvelope, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .transport
                .authorize(gloo_net::http::Request::get(&self.url(ME_ENDPOINT)), Some(token))
                .build()
                .map_err(|e| AuthError::Network(e.to_string()))?;
            let resp = self.transport.send(request).await?;
            super::transport::read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.transport, self.url(ME_ENDPOINT), token);
            Err(AuthError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthEnvelope, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.url(LOGIN_ENDPOINT))
                .json(credentials)
                .map_err(|e| AuthError::Network(e.to_string()))?;
            let resp = self.transport.send(request).await?;
            super::transport::read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(LOGIN_ENDPOINT), credentials);
            Err(AuthError::Unavailable)
        }
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .transport
                .authorize(gloo_net::http::Request::post(&self.url(LOGOUT_ENDPOINT)), Some(token))
                .build()
                .map_err(|e| AuthError::Network(e.to_string()))?;
            // Bypasses the response phase: local state is already cleared.
            let resp = request.send().await.map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Rejected { status: resp.status(), message: None });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(LOGOUT_ENDPOINT), token);
            Err(AuthError::Unavailable)
        }
    }
}
