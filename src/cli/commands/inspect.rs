//! Commands that print something and exit.

use crate::api::openapi;
use crate::config::{self, Config};

/// Print the OpenAPI document
pub fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", openapi::openapi_pretty()?);
    Ok(())
}

/// Validate and print the effective configuration
pub fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    config.validate()?;
    print!("{}", config::to_toml(config)?);
    Ok(())
}
