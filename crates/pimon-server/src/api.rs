use crate::state::{AppState, FleetMap};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};

static DASHBOARD_HTML: &str = include_str!("templates/dashboard.html");

/// The rendering page. Everything it shows comes from `/api/metrics`,
/// which it polls client-side.
async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// The whole fleet map as one JSON object keyed by host address, read
/// under the same lock the poller writes under.
async fn api_metrics(State(state): State<AppState>) -> Json<FleetMap> {
    Json(state.lock_fleet().clone())
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/metrics", get(api_metrics))
}
