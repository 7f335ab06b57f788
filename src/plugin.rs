//! One plugin invocation, from selected mode to protocol output.

use std::io::Write;

use tracing::debug;

use crate::collector::{Collector, StatsSource};
use crate::error::PluginError;
use crate::mode::{Mode, RunKind};
use crate::render;

/// Runs the plugin once and writes protocol lines to `out`.
///
/// `connect` builds the collector and is only called for a value run, so a
/// config run neither sets up nor touches the source. A value run fetches
/// exactly once; on failure nothing is written.
pub fn run<S, F>(
    mode: Mode,
    kind: RunKind,
    connect: F,
    out: &mut dyn Write,
) -> Result<(), PluginError>
where
    S: StatsSource,
    F: FnOnce() -> Result<Collector<S>, PluginError>,
{
    debug!(%mode, ?kind, "plugin run");

    match kind {
        RunKind::Config => mode.render_config(out)?,
        RunKind::Values => {
            let collector = connect()?;
            let stats = collector.collect(mode)?;
            render::values(&stats, out)?;
        }
    }

    out.flush()?;
    Ok(())
}
