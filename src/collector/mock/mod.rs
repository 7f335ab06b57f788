//! Mock statistics sources for testing.
//!
//! This module provides `MockSource` and pre-built server scenarios for
//! testing the collector without a running BIND statistics channel.

mod scenarios;
mod source;

pub use scenarios::SCENARIO_URL;
pub use source::MockSource;
