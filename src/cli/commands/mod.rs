//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `serve`: run the HTTP server
//! - `inspect`: print the OpenAPI document or the effective configuration

mod inspect;
mod serve;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::{self, Config, Overrides};

pub use inspect::{cmd_check_config, cmd_openapi};
pub use serve::cmd_serve;

/// Song Library CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/song-library/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Settings that take precedence over the config file
#[derive(Args, Debug, Default, Clone)]
pub struct OverrideArgs {
    /// Address to listen on
    #[arg(long, env = "ADDRESS", global = true)]
    pub address: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT", global = true)]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(long, env = "STORAGE_PATH", global = true)]
    pub storage_path: Option<PathBuf>,

    /// Base URL of the song info service
    #[arg(long, env = "SONG_INFO_URL", global = true)]
    pub song_info_url: Option<String>,
}

impl From<OverrideArgs> for Overrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            address: args.address,
            port: args.port,
            storage_path: args.storage_path,
            song_info_url: args.song_info_url,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Print the OpenAPI document as JSON
    Openapi,
    /// Print the effective configuration as TOML
    CheckConfig,
}

impl Cli {
    /// Config file plus command-line/environment overrides.
    pub fn effective_config(&self) -> anyhow::Result<Config> {
        let config = config::load(self.config.as_deref())?
            .with_overrides(self.overrides.clone().into());
        Ok(config)
    }
}

/// Run the selected command; `serve` when none is given.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let rt = Runtime::new()?;
            cmd_serve(&rt, cli.effective_config()?)
        }
        Commands::Openapi => cmd_openapi(),
        Commands::CheckConfig => cmd_check_config(&cli.effective_config()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_means_serve() {
        let cli = Cli::try_parse_from(["song-library"]).unwrap();
        assert_eq!(cli.command.unwrap_or(Commands::Serve), Commands::Serve);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 3000\naddress = \"0.0.0.0\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "song-library",
            "--config",
            path.to_str().unwrap(),
            "check-config",
            "--port",
            "9000",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::CheckConfig));

        let config = cli.effective_config().unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.address, "0.0.0.0");
    }
}
