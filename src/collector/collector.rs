//! Fetch-parse-extract pipeline for one invocation.

use tracing::{debug, warn};

use crate::collector::traits::StatsSource;
use crate::document::Document;
use crate::error::PluginError;
use crate::extract::{Extractor, Stats};
use crate::mode::Mode;

/// Collects one mode's statistics from a source.
///
/// Holds no state between calls: every `collect` starts from zeroed
/// counters and reads only the freshly fetched document.
pub struct Collector<S: StatsSource> {
    source: S,
    url: String,
}

impl<S: StatsSource> Collector<S> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `source` - Document source (HTTP or mock)
    /// * `url` - Statistics URL, passed to the source unchanged
    pub fn new(source: S, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
        }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the document once and extracts `mode`'s statistics.
    ///
    /// A query that matches nothing is not an error: the returned state is
    /// simply left zeroed.
    pub fn collect(&self, mode: Mode) -> Result<Stats, PluginError> {
        let body = self.source.fetch(&self.url)?;
        debug!(url = %self.url, bytes = body.len(), "statistics document fetched");

        let document = Document::parse(&body)?;
        let nodes = document.query(mode.query_path())?;
        if nodes.is_empty() {
            warn!(path = mode.query_path(), "no result");
        } else {
            debug!(path = mode.query_path(), matches = nodes.len(), "query evaluated");
        }

        let mut stats = mode.new_stats();
        for node in nodes {
            stats.extract(node);
        }
        Ok(stats)
    }
}
