//! CLI module
//!
//! Command-line interface for printing listing titles.
//!
//! Settings are resolved from flags, then environment variables, then an
//! optional YAML config file, then built-in defaults.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{ResolvedSettings, Runner};
