//! bind9stats - BIND 9 statistics plugin for munin-style monitoring agents.
//!
//! This library provides the pieces behind the `bind9stats` binary:
//! - `collector` - retrieval of the statistics document (HTTP or mock)
//! - `document` - parsed XML tree and path queries
//! - `catalog` - record types graphed individually, plus the OTHER bucket
//! - `extract` - turning matched subtrees into per-run state
//! - `render` - plugin protocol output (config and values)
//! - `mode` - selection of the graph from the invocation name
//! - `config` - environment configuration
//! - `plugin` - one complete invocation

pub mod catalog;
pub mod collector;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod mode;
pub mod plugin;
pub mod render;
