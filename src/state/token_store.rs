//! Persisted bearer-token slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only piece of session state that survives a reload. The
//! resolver, login, logout, the transport interceptor and the inactivity
//! watchdog all write through this one slot; writes are full overwrites or
//! idempotent clears, so last write wins.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Shared handle to the process-wide token slot.
pub type SharedTokenStore = Arc<dyn TokenStore + Send + Sync>;

/// At most one opaque bearer token, with no local expiry metadata.
pub trait TokenStore {
    /// Current token, if any. Blank values count as absent.
    fn get(&self) -> Option<String>;
    /// Replace the stored token unconditionally.
    fn set(&self, token: &str);
    /// Remove the stored token. Idempotent.
    fn clear(&self);
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

/// Token slot backed by `localStorage` under a fixed key.
///
/// Outside the browser every read is empty and writes are dropped.
#[derive(Clone, Debug)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = Self::storage()?;
            non_blank(storage.get_item(&self.key).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::storage() else {
                log::warn!("localStorage unavailable; token not persisted");
                return;
            };
            if let Err(e) = storage.set_item(&self.key, token) {
                log::warn!("failed to persist token: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.key, token);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if let Err(e) = storage.remove_item(&self.key) {
                    log::warn!("failed to remove token: {e:?}");
                }
            }
            log::debug!("token slot '{}' cleared", self.key);
        }
    }
}

/// In-memory token slot, used for native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        non_blank(self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn set(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
