//! Abstraction over retrieval of the statistics document.
//!
//! The `StatsSource` trait lets the collector read from the real statistics
//! server over HTTP or from an in-memory mock in tests.

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::FetchError;

/// Source of raw statistics documents.
pub trait StatsSource {
    /// Retrieves the complete document at `url`.
    ///
    /// A single attempt is made; any failure is returned to the caller.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<S: StatsSource + ?Sized> StatsSource for &S {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

/// Statistics server reached over HTTP.
///
/// Use this in production against BIND's `statistics-channels` listener.
/// Proxy environment variables are ignored: the channel is expected on the
/// local host or network.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    max_body_bytes: u64,
}

impl HttpSource {
    /// Creates an HTTP source.
    ///
    /// # Arguments
    /// * `timeout` - Limit for connecting and reading the whole response
    /// * `max_body_bytes` - Read limit when the server declares no length
    pub fn new(timeout: Duration, max_body_bytes: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .no_proxy()
            .user_agent(concat!("bind9stats/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            max_body_bytes,
        })
    }
}

impl StatsSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(format!("can't fetch url {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let declared = response.content_length().filter(|&len| len > 0);
        let limit = declared.unwrap_or(self.max_body_bytes);
        debug!(?declared, limit, "reading statistics body");

        // One extra byte tells a body of exactly `limit` bytes from a longer one.
        let mut body = Vec::new();
        response
            .take(limit.saturating_add(1))
            .read_to_end(&mut body)
            .map_err(|e| FetchError::Body(e.to_string()))?;

        if body.len() as u64 > limit {
            warn!(limit, "statistics body exceeds read limit, truncating");
            body.truncate(limit as usize);
        }

        Ok(body)
    }
}
