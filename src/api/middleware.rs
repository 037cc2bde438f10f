//! Request logging middleware.
//!
//! Every request runs inside a `request` span carrying its method and path;
//! entry and completion (status, latency) are logged at `info`.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let span = tracing::info_span!("request", %method, %path);

    async move {
        let started = Instant::now();
        tracing::info!("Request started");

        let response = next.run(request).await;

        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await
}
