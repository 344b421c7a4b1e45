use crate::state::AppState;
use crate::{api, logging};
use axum::middleware;
use axum::Router;

pub fn build_http_app(state: AppState) -> Router {
    api::routes()
        .fallback(api::not_found)
        .with_state(state)
        .layer(middleware::from_fn(logging::request_logging))
}
