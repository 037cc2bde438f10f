//! Song Library - a REST service for a music library.
//!
//! Songs are added by group and title; release date, lyrics and video link
//! are fetched from an external song info service. The library can be
//! filtered, songs updated or removed, and lyrics read page by page.
//! Run without arguments to start the server, see `--help` for the rest.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod lyrics;
pub mod model;
pub mod server;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log directive used when `RUST_LOG` does not mention this crate.
const DEFAULT_LOG_DIRECTIVE: &str = "song_library=info";

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so that `openapi` and `check-config` output stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .init();

    cli::run_command(&args)
}
