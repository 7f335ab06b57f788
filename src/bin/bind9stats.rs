//! bind9stats - munin plugin reporting BIND 9 statistics.
//!
//! Install the binary once and symlink it into the plugin directory under a
//! name ending in the graph to report:
//!
//! ```text
//! ln -s /usr/local/bin/bind9stats /etc/munin/plugins/bind9stats_qstats
//! ln -s /usr/local/bin/bind9stats /etc/munin/plugins/bind9stats_memory
//! ```
//!
//! The statistics URL comes from `bind9statsurl` in the environment.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

use clap::Parser;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use bind9stats::collector::{Collector, HttpSource};
use bind9stats::config::PluginConfig;
use bind9stats::error::PluginError;
use bind9stats::mode::{Mode, RunKind};
use bind9stats::plugin;

/// BIND 9 statistics plugin.
///
/// The agent owns the command line: no flags are defined, so every word is
/// a positional and never a parse error. Diagnostics are tuned with
/// `RUST_LOG` instead.
#[derive(Parser, Debug)]
#[command(
    name = "bind9stats",
    about = "BIND 9 statistics plugin for munin",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// `config` prints graph declarations; anything else prints values.
    #[arg(allow_hyphen_values = true)]
    arg: Option<OsString>,

    /// Further arguments are accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<OsString>,
}

impl Args {
    fn run_kind(&self) -> RunKind {
        RunKind::from_arg(self.arg.as_deref().and_then(OsStr::to_str))
    }
}

/// Initializes the tracing subscriber on stderr; stdout carries the protocol.
/// Default level is WARN.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(invocation: Option<&str>, args: &Args) -> Result<(), PluginError> {
    let config = PluginConfig::from_env()?;
    let mode = Mode::from_invocation(invocation.ok_or(PluginError::NoInvocationName)?)?;
    let kind = args.run_kind();
    debug!(url = %config.url, %mode, ?kind, ignored = args.rest.len(), "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    plugin::run(
        mode,
        kind,
        move || {
            let source = HttpSource::new(config.timeout, config.max_body_bytes)?;
            Ok(Collector::new(source, config.url))
        },
        &mut out,
    )?;
    out.flush()?;
    Ok(())
}

fn main() {
    let invocation = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned());
    let args = Args::parse();

    init_logging();

    if let Err(e) = run(invocation.as_deref(), &args) {
        eprintln!("{}: {}", invocation.as_deref().unwrap_or("bind9stats"), e);
        std::process::exit(e.exit_code());
    }
}
