//! Server lifecycle: bind, serve, shut down.
//!
//! On SIGINT/SIGTERM the listener stops accepting connections and in-flight
//! requests get `shutdown_timeout` to finish. Whatever is still running after
//! that is aborted. The connection pool is closed last.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::api::{self, AppState};
use crate::config::Config;
use crate::db;
use crate::enrichment::SongInfoClient;

/// Run the service with `config` until a shutdown signal arrives.
pub async fn run(config: Config) -> anyhow::Result<()> {
    config.validate()?;
    let addr = config.server.socket_addr()?;

    let db_url = db::db_url(Some(&config.storage.path));
    let pool = db::init_db(&db_url, config.storage.max_connections)
        .await
        .with_context(|| format!("Failed to open database {db_url}"))?;
    tracing::info!(database = %db_url, "Database ready");

    let song_info = SongInfoClient::new(
        config.song_info.base_url.clone(),
        config.song_info.timeout(),
    )?;
    tracing::info!(base_url = %config.song_info.base_url, "Song info client ready");

    let state = AppState::new(pool.clone(), Arc::new(song_info));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(address = %listener.local_addr()?, "Listening");

    let result = serve(
        listener,
        api::router(state),
        shutdown_signal(),
        config.server.shutdown_timeout(),
    )
    .await;

    pool.close().await;
    tracing::info!("Stopped");
    result
}

/// Serve `router` on `listener` until `signal` completes.
///
/// After the signal, in-flight requests may run for up to `timeout`.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    signal: F,
    timeout: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let stop = Arc::new(Notify::new());
    let stopped = Arc::clone(&stop);
    let server = axum::serve(listener, router)
        .with_graceful_shutdown(async move { stopped.notified().await });
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut server => {
            // The server only ends on its own if accepting failed
            return joined.context("Server task failed")?.context("Server failed");
        }
        _ = signal => {}
    }

    tracing::info!(timeout_secs = timeout.as_secs_f64(), "Shutting down");
    stop.notify_one();

    match tokio::time::timeout(timeout, &mut server).await {
        Ok(joined) => joined.context("Server task failed")?.context("Server failed"),
        Err(_) => {
            tracing::warn!("Shutdown timeout elapsed, aborting remaining requests");
            server.abort();
            Ok(())
        }
    }
}

/// Completes on Ctrl+C, or on SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
