//! Extractors that turn matched document subtrees into plugin state.
//!
//! Each mode queries one path; every matched subtree is handed to the mode's
//! extractor, which updates its accumulated state in place.

mod memory;
mod query_types;

pub use memory::MemorySample;

use crate::catalog::QueryTypeCounters;
use crate::document::Node;

/// Consumes one matched subtree at a time.
pub trait Extractor {
    /// Updates state from the children of `node`.
    fn extract(&mut self, node: Node<'_>);
}

/// Accumulated state of one run, tagged by mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stats {
    QueryTypes(QueryTypeCounters),
    Memory(MemorySample),
}

impl Extractor for Stats {
    fn extract(&mut self, node: Node<'_>) {
        match self {
            Stats::QueryTypes(counters) => counters.extract(node),
            Stats::Memory(sample) => sample.extract(node),
        }
    }
}

/// Parses counter text the way C's `atol` does, restricted to non-negative
/// values: leading whitespace and one `+` skipped, leading digits taken,
/// anything else yields 0. Overflow saturates.
pub fn parse_counter(text: &str) -> u64 {
    let text = text.trim_start();
    text.strip_prefix('+')
        .unwrap_or(text)
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_counter_plain_number() {
        assert_eq!(parse_counter("12345"), 12345);
        assert_eq!(parse_counter("0"), 0);
    }

    #[test]
    fn parse_counter_takes_leading_digits() {
        assert_eq!(parse_counter("  42\n"), 42);
        assert_eq!(parse_counter("17abc"), 17);
    }

    #[test]
    fn parse_counter_non_numeric_is_zero() {
        assert_eq!(parse_counter(""), 0);
        assert_eq!(parse_counter("abc"), 0);
        assert_eq!(parse_counter("-5"), 0);
    }

    #[test]
    fn parse_counter_accepts_plus_sign() {
        assert_eq!(parse_counter("+5"), 5);
        assert_eq!(parse_counter("  +42 "), 42);
        assert_eq!(parse_counter("++5"), 0);
        assert_eq!(parse_counter("+ 5"), 0);
    }

    #[test]
    fn parse_counter_saturates() {
        assert_eq!(parse_counter("99999999999999999999999"), u64::MAX);
    }
}
