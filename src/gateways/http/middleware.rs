use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::Instrument;

/// Logs every request and its response inside a `request` span.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
    );

    async move {
        tracing::info!("REQUEST");
        let started = Instant::now();

        let response = next.run(request).await;

        let status = response.status();
        let latency_ms = started.elapsed().as_millis() as u64;
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), latency_ms, "RESPONSE");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "RESPONSE");
        }

        response
    }
    .instrument(span)
    .await
}
