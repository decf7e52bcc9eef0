//! Console configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser bundle has no process environment, so deploy-specific values are
//! baked in through `option_env!` when the wasm artifact is built. Parsing is
//! kept separate from the lookup so it can be exercised natively.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "torneo_console_token";
pub const DEFAULT_SIGNIN_PATH: &str = "/signin";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_INACTIVITY_TIMEOUT_SECS: u64 = 15 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TORNEO_IDLE_TIMEOUT_SECS '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Deploy-time settings shared by the session layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// REST API origin + prefix; empty means same origin.
    pub api_base_url: String,
    /// localStorage key holding the bearer token.
    pub token_storage_key: String,
    pub signin_path: String,
    pub home_path: String,
    pub inactivity_timeout: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            signin_path: DEFAULT_SIGNIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            inactivity_timeout: Duration::from_secs(DEFAULT_INACTIVITY_TIMEOUT_SECS),
        }
    }
}

impl ConsoleConfig {
    /// Build config from variables captured when the bundle was compiled.
    ///
    /// Optional:
    /// - `TORNEO_API_BASE_URL`: REST origin, default same origin
    /// - `TORNEO_IDLE_TIMEOUT_SECS`: inactivity timeout, default 900
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if the timeout is not a positive integer.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("TORNEO_API_BASE_URL"), option_env!("TORNEO_IDLE_TIMEOUT_SECS"))
    }

    /// Build config from raw optional values, applying defaults for absent ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if `idle_timeout_secs` is present
    /// but not a positive integer.
    pub fn from_values(api_base_url: Option<&str>, idle_timeout_secs: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = api_base_url {
            config.api_base_url = url.trim().trim_end_matches('/').to_owned();
        }
        if let Some(raw) = idle_timeout_secs {
            config.inactivity_timeout = parse_timeout(raw)?;
        }
        Ok(config)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
