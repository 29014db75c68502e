//! Router assembly

use super::handlers::{self, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request bodies larger than this are rejected outright
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::supervisor_panel))
        .route("/respond", post(handlers::respond))
        .route("/api/v1/questions", post(handlers::ask_question))
        .route("/api/v1/requests", get(handlers::list_requests))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
