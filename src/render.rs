//! Plugin protocol output.
//!
//! Config runs declare the graph and its fields; value runs print one
//! `<field>.value <value>` line per field. Both are line-oriented plain text.

use std::io::{self, Write};

use crate::catalog::{OTHER, QueryTypeCounters};
use crate::extract::{MemorySample, Stats};

/// Category shared by every graph of this plugin.
pub const GRAPH_CATEGORY: &str = "BIND9";

const QUERY_TYPES_TITLE: &str = "BIND9 Queries by type";
const MEMORY_TITLE: &str = "BIND9 Memory usage";

/// Declares the queries-by-type graph: every catalog entry, then OTHER.
pub fn query_types_config(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "graph_title {}", QUERY_TYPES_TITLE)?;
    writeln!(out, "graph_category {}", GRAPH_CATEGORY)?;

    let counters = QueryTypeCounters::new();
    let names = counters.slots().iter().map(|slot| slot.name).chain([OTHER]);
    for name in names {
        writeln!(out, "{}.type COUNTER", name)?;
        writeln!(out, "{}.min 0", name)?;
        writeln!(out, "{}.label {}", name, name)?;
    }
    Ok(())
}

/// Declares the memory graph.
pub fn memory_config(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "graph_title {}", MEMORY_TITLE)?;
    writeln!(out, "graph_category {}", GRAPH_CATEGORY)?;
    writeln!(out, "totaluse.type GAUGE")?;
    writeln!(out, "totaluse.label Total RAM usage")?;
    writeln!(out, "inuse.label In use")?;
    Ok(())
}

/// Prints the values accumulated during one run.
pub fn values(stats: &Stats, out: &mut dyn Write) -> io::Result<()> {
    match stats {
        Stats::QueryTypes(counters) => query_types_values(counters, out),
        Stats::Memory(sample) => memory_values(sample, out),
    }
}

fn query_types_values(counters: &QueryTypeCounters, out: &mut dyn Write) -> io::Result<()> {
    for slot in counters.slots() {
        writeln!(out, "{}.value {}", slot.name, slot.count)?;
    }
    writeln!(out, "{}.value {}", OTHER, counters.other())
}

fn memory_values(sample: &MemorySample, out: &mut dyn Write) -> io::Result<()> {
    if let Some(total) = &sample.total_use {
        writeln!(out, "totaluse.value {}", total)?;
    }
    if let Some(in_use) = &sample.in_use {
        writeln!(out, "inuse.value {}", in_use)?;
    }
    Ok(())
}
