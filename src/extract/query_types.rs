//! Incoming queries by record type (`queries-in/rdtype` entries).

use tracing::trace;

use super::{Extractor, parse_counter};
use crate::catalog::QueryTypeCounters;
use crate::document::Node;

impl Extractor for QueryTypeCounters {
    /// Pairs the `name` and `counter` children of one `rdtype` entry.
    ///
    /// An entry missing either field contributes nothing.
    fn extract(&mut self, node: Node<'_>) {
        let mut name = None;
        let mut counter = None;

        for child in node.children() {
            match child.name() {
                "name" => name = Some(child.text().trim()),
                "counter" => counter = Some(child.text()),
                _ => {}
            }
        }

        match (name, counter) {
            (Some(name), Some(counter)) => {
                let count = parse_counter(counter);
                trace!(rdtype = name, count, "query type counter");
                self.record(name, count);
            }
            _ => trace!(?name, ?counter, "incomplete rdtype entry skipped"),
        }
    }
}
