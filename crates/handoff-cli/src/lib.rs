//! handoff-cli library
//!
//! Exposes the argument definitions and command runners so they can be
//! exercised without spawning the binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod commands;

pub use commands::types::{Cli, Commands, InjectArgs, KnowledgeArgs};

/// Log filter for the given verbosity
#[must_use]
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber; logs go to stderr so stdout stays
/// parseable under `--json`
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(verbose))
        .init();
}
