use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use pimon_collector::SnapshotCollector;
use pimon_common::types::Snapshot;
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};

pub type SharedCollector = Arc<Mutex<SnapshotCollector>>;

/// Snapshot endpoint, served on both `/` and `/metrics`.
///
/// Collection is a handful of small synchronous file reads; only the very
/// first request ever pays the short CPU bootstrap sleep. The mutex keeps
/// overlapping requests from racing the CPU tick pair.
async fn metrics(State(collector): State<SharedCollector>) -> Json<Snapshot> {
    let snapshot = collector
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .collect();
    Json(snapshot)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Build the agent router. No request-logging layer here: the dashboard
/// polls the endpoint every few seconds.
pub fn build_http_app(collector: SharedCollector) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(metrics))
        .route("/metrics", get(metrics))
        .fallback(not_found)
        .with_state(collector)
        .layer(cors)
}
