//! In-memory statistics source for testing collectors without a server.

use std::cell::Cell;
use std::collections::HashMap;

use crate::collector::FetchError;
use crate::collector::traits::StatsSource;

/// In-memory source mapping URLs to response bodies.
///
/// URLs without a registered document behave like an unreachable server.
/// Every fetch attempt is counted, so tests can assert that a run did or did
/// not touch the network.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    documents: HashMap<String, Vec<u8>>,
    fetches: Cell<usize>,
}

impl MockSource {
    /// Creates a source with no documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` for `url`.
    pub fn add_document(&mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.documents.insert(url.into(), body.into());
    }

    /// Number of fetch attempts so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl StatsSource for MockSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.fetches.set(self.fetches.get() + 1);
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Transport(format!("can't fetch url {}: connection refused", url)))
    }
}
