use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Format elapsed time as a human-readable string.
fn format_elapsed(elapsed_us: u128) -> String {
    if elapsed_us < 1000 {
        format!("{elapsed_us}µs")
    } else if elapsed_us < 1_000_000 {
        format!("{}ms", elapsed_us / 1000)
    } else {
        format!("{:.1}s", elapsed_us as f64 / 1_000_000.0)
    }
}

/// Request/response logging middleware.
///
/// `/api/metrics` is excluded: the dashboard page polls it every few
/// seconds and the lines would drown out everything else.
pub async fn request_logging(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    if path == "/api/metrics" {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = format_elapsed(start.elapsed().as_micros());
    if status.is_server_error() {
        tracing::error!(method = %method, path = %path, status = status.as_u16(), elapsed = %elapsed, "request");
    } else if status.is_client_error() {
        tracing::warn!(method = %method, path = %path, status = status.as_u16(), elapsed = %elapsed, "request");
    } else {
        tracing::info!(method = %method, path = %path, status = status.as_u16(), elapsed = %elapsed, "request");
    }

    response
}
