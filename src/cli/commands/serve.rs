//! The `serve` command.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::server;

/// Run the HTTP server until Ctrl+C or SIGTERM
pub fn cmd_serve(rt: &Runtime, config: Config) -> anyhow::Result<()> {
    tracing::info!(
        address = %config.server.address,
        port = config.server.port,
        storage = %config.storage.path.display(),
        song_info = %config.song_info.base_url,
        "Starting song library"
    );
    rt.block_on(server::run(config))
}
