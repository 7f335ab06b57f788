//! Statistics collection from a BIND 9 statistics channel.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                   Collector                   │
//! │   fetch ──► Document::parse ──► query(path)   │
//! │                                   │           │
//! │                         Extractor per match   │
//! │                                   │           │
//! │                                 Stats         │
//! └──────────┬────────────────────────────────────┘
//!            │
//!     ┌──────▼──────┐
//!     │ StatsSource │ (trait)
//!     └──────┬──────┘
//!            │
//!     ┌──────┴────────┐
//!     │               │
//! ┌───▼────────┐ ┌────▼───────┐
//! │ HttpSource │ │ MockSource │
//! │ (reqwest)  │ │ (Testing)  │
//! └────────────┘ └────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use bind9stats::collector::{Collector, MockSource, SCENARIO_URL};
//! use bind9stats::extract::Stats;
//! use bind9stats::mode::Mode;
//!
//! let collector = Collector::new(MockSource::simple_queries(), SCENARIO_URL);
//! let Stats::QueryTypes(counters) = collector.collect(Mode::QueryStats).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(counters.get("A"), Some(100));
//! assert_eq!(counters.other(), 7);
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod mock;
pub mod traits;

pub use collector::Collector;
pub use mock::{MockSource, SCENARIO_URL};
pub use traits::{HttpSource, StatsSource};

/// Error type for document retrieval failures.
#[derive(Debug)]
pub enum FetchError {
    /// Connection, DNS, timeout or other transport failure.
    Transport(String),
    /// The server answered with a non-success status.
    Status { url: String, status: u16 },
    /// The response body could not be read.
    Body(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "{}", msg),
            FetchError::Status { url, status } => {
                write!(f, "can't fetch url {}: HTTP status {}", url, status)
            }
            FetchError::Body(msg) => write!(f, "error reading response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
