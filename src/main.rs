//! Vinyls - search MusicBrainz for an album and add it to a record collection.
//!
//! The collection is a JSON document (`src/collections.json`) with cover
//! images next to it in `public/covers/`, both read by the web front end.

pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod lookup;
pub mod workflow;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "vinyls=info";

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(log_filter(rust_log.as_deref()))
        .init();

    cli::run_command(&args)
}

/// Build the log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
