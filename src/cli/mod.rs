//! Command-line interface for song-library.
//!
//! Without a subcommand the HTTP server is started; the other commands
//! inspect the API document and the effective configuration.

mod commands;

pub use commands::{Cli, Commands, run_command};
