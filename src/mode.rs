//! Selection of what to report, from the plugin's invocation name.
//!
//! The binary is installed once and symlinked under one name per graph,
//! e.g. `bind9stats_qstats` and `bind9stats_memory`. The text after the last
//! `_` picks the mode.

use std::io::{self, Write};
use std::path::Path;

use crate::catalog::QueryTypeCounters;
use crate::error::PluginError;
use crate::extract::{MemorySample, Stats};
use crate::render;

/// Graph reported by one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Incoming queries by record type.
    QueryStats,
    /// Memory usage summary.
    Memory,
}

/// Static description of a mode.
struct ModeSpec {
    mode: Mode,
    suffix: &'static str,
    query_path: &'static str,
    config: fn(&mut dyn Write) -> io::Result<()>,
    new_stats: fn() -> Stats,
}

static MODES: [ModeSpec; 2] = [
    ModeSpec {
        mode: Mode::Memory,
        suffix: "memory",
        query_path: "/isc/bind/statistics/memory/summary",
        config: render::memory_config,
        new_stats: memory_stats,
    },
    ModeSpec {
        mode: Mode::QueryStats,
        suffix: "qstats",
        query_path: "/isc/bind/statistics/server/queries-in/rdtype",
        config: render::query_types_config,
        new_stats: query_type_stats,
    },
];

fn memory_stats() -> Stats {
    Stats::Memory(MemorySample::new())
}

fn query_type_stats() -> Stats {
    Stats::QueryTypes(QueryTypeCounters::new())
}

impl Mode {
    /// Derives the mode from an invocation path such as
    /// `/etc/munin/plugins/bind9stats_qstats`.
    pub fn from_invocation(invocation: &str) -> Result<Self, PluginError> {
        let name = Path::new(invocation)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(invocation);

        let (_, suffix) = name
            .rsplit_once('_')
            .ok_or_else(|| PluginError::NoModeSuffix(name.to_string()))?;

        Self::from_suffix(suffix)
    }

    /// Looks up a mode by its suffix.
    pub fn from_suffix(suffix: &str) -> Result<Self, PluginError> {
        MODES
            .iter()
            .find(|spec| spec.suffix == suffix)
            .map(|spec| spec.mode)
            .ok_or_else(|| PluginError::UnknownMode(suffix.to_string()))
    }

    fn spec(self) -> &'static ModeSpec {
        match self {
            Mode::Memory => &MODES[0],
            Mode::QueryStats => &MODES[1],
        }
    }

    /// Suffix that selects this mode.
    pub fn suffix(self) -> &'static str {
        self.spec().suffix
    }

    /// Path of the subtrees this mode extracts from.
    pub fn query_path(self) -> &'static str {
        self.spec().query_path
    }

    /// Fresh zeroed state for one run.
    pub fn new_stats(self) -> Stats {
        (self.spec().new_stats)()
    }

    /// Writes this mode's graph declaration.
    pub fn render_config(self, out: &mut dyn Write) -> io::Result<()> {
        (self.spec().config)(out)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Kind of run requested by the first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Print graph declarations only; nothing is fetched.
    Config,
    /// Fetch the document and print current values.
    Values,
}

impl RunKind {
    /// `config` selects a declaration run; anything else a value run.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("config") => RunKind::Config,
            _ => RunKind::Values,
        }
    }
}
