//! Plugin configuration from the environment.
//!
//! The monitoring agent passes configuration through environment variables,
//! e.g. in munin's `plugin-conf.d`:
//!
//! ```text
//! [bind9stats_*]
//! env.bind9statsurl http://127.0.0.2:8053/
//! ```

use std::time::Duration;

use crate::error::PluginError;

/// Environment variable holding the statistics-server URL.
pub const URL_VAR: &str = "bind9statsurl";

/// Timeout for the whole HTTP exchange.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on a response body without a declared length.
pub const MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

/// Settings for one plugin invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    /// Statistics URL, including the trailing `/` the server expects.
    pub url: String,
    pub timeout: Duration,
    pub max_body_bytes: u64,
}

impl PluginConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, PluginError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value
    /// if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PluginError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_VAR)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(PluginError::MissingUrl(URL_VAR))?;

        Ok(Self {
            url,
            timeout: FETCH_TIMEOUT,
            max_body_bytes: MAX_BODY_BYTES,
        })
    }
}
