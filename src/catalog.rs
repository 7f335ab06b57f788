//! Fixed catalog of DNS record types tracked as individual counters.
//!
//! Catalog order is the order of both declaration and value output, so the
//! monitoring agent's graph stays stable across runs.

/// Record types graphed individually, in output order.
pub const RECORD_TYPES: [&str; 19] = [
    "A", "AAAA", "AXFR", "CNAME", "DNAME", "DNSKEY", "DS", "MX", "NAPTR", "NS", "NSEC", "NSEC3",
    "PTR", "RRSIG", "SOA", "SRV", "SSHFP", "TLSA", "TXT",
];

/// Field name of the catch-all bucket for types outside the catalog.
pub const OTHER: &str = "OTHER";

/// One named counter of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSlot {
    pub name: &'static str,
    pub count: u64,
}

/// Per-invocation query counters: one slot per catalog entry plus OTHER.
///
/// Invariant: `other` equals the sum of all counters recorded under names
/// missing from [`RECORD_TYPES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTypeCounters {
    slots: Vec<CounterSlot>,
    other: u64,
}

impl Default for QueryTypeCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryTypeCounters {
    /// Creates a zeroed counter set over [`RECORD_TYPES`].
    pub fn new() -> Self {
        Self {
            slots: RECORD_TYPES
                .iter()
                .map(|&name| CounterSlot { name, count: 0 })
                .collect(),
            other: 0,
        }
    }

    /// Records the absolute count for `name`.
    ///
    /// Catalog names are matched case-sensitively and overwritten (last write
    /// wins). Any other name is added to the OTHER bucket.
    pub fn record(&mut self, name: &str, count: u64) {
        match self.slots.iter_mut().find(|slot| slot.name == name) {
            Some(slot) => slot.count = count,
            None => self.other = self.other.saturating_add(count),
        }
    }

    /// Returns the count for a catalog name, or `None` if not in the catalog.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| slot.count)
    }

    /// Catalog slots in output order.
    pub fn slots(&self) -> &[CounterSlot] {
        &self.slots
    }

    /// Sum of counters for types outside the catalog.
    pub fn other(&self) -> u64 {
        self.other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_cataloged(name: &str) -> bool {
        RECORD_TYPES.contains(&name)
    }

    #[test]
    fn test_new_is_zeroed_in_catalog_order() {
        let counters = QueryTypeCounters::new();
        let names: Vec<&str> = counters.slots().iter().map(|s| s.name).collect();
        assert_eq!(names, RECORD_TYPES);
        assert!(counters.slots().iter().all(|s| s.count == 0));
        assert_eq!(counters.other(), 0);
    }

    #[test]
    fn test_record_overwrites_known_type() {
        let mut counters = QueryTypeCounters::new();
        counters.record("MX", 10);
        counters.record("MX", 4);
        assert_eq!(counters.get("MX"), Some(4));
        assert_eq!(counters.other(), 0);
    }

    #[test]
    fn test_record_sums_unknown_types() {
        let mut counters = QueryTypeCounters::new();
        counters.record("BOGUS", 7);
        counters.record("SPF", 3);
        counters.record("BOGUS", 1);
        assert_eq!(counters.other(), 11);
        assert!(counters.slots().iter().all(|s| s.count == 0));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut counters = QueryTypeCounters::new();
        counters.record("aaaa", 5);
        assert_eq!(counters.get("AAAA"), Some(0));
        assert_eq!(counters.get("aaaa"), None);
        assert_eq!(counters.other(), 5);
    }

    #[test]
    fn test_other_matches_sum_of_uncataloged() {
        let input = [
            ("A", 100u64),
            ("TYPE65", 12),
            ("AAAA", 50),
            ("ANY", 9),
            ("CAA", 2),
            ("TXT", 8),
        ];
        let mut counters = QueryTypeCounters::new();
        for (name, count) in input {
            counters.record(name, count);
        }

        let expected: u64 = input
            .iter()
            .filter(|(name, _)| !is_cataloged(name))
            .map(|(_, count)| count)
            .sum();
        assert_eq!(counters.other(), expected);
    }

    #[test]
    fn test_all_cataloged_leaves_other_zero() {
        let mut counters = QueryTypeCounters::new();
        for (i, name) in RECORD_TYPES.iter().rev().enumerate() {
            counters.record(name, i as u64 + 1);
        }
        assert_eq!(counters.other(), 0);
        assert_eq!(counters.get("TXT"), Some(1));
        assert_eq!(counters.get("A"), Some(19));
    }
}
