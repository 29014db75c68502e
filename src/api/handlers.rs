//! HTTP handlers

use super::models::{ApiError, AskRequest, AskResponse, ListRequestsResponse, RespondForm};
use super::panel;
use crate::agent::{Reply, Resolver, Responder};
use crate::error::FrontdeskError;
use crate::knowledge::KnowledgeStore;
use crate::ledger::RequestLedger;
use crate::metrics::METRICS;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use std::sync::Arc;
use tracing::{error, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
    pub resolver: Arc<Resolver>,
    pub ledger: Arc<RequestLedger>,
    pub knowledge: Arc<KnowledgeStore>,
}

fn status_for(err: &FrontdeskError) -> StatusCode {
    match err {
        FrontdeskError::RequestNotFound(_) => StatusCode::NOT_FOUND,
        FrontdeskError::DuplicateRequest(_) | FrontdeskError::AlreadyResolved(_) => {
            StatusCode::CONFLICT
        }
        FrontdeskError::Validation(_) => StatusCode::BAD_REQUEST,
        FrontdeskError::Config(_) | FrontdeskError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Ask a question
///
/// POST /api/v1/questions
pub async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ApiError>)> {
    info!("question received");

    match state.responder.handle(&request.question).await {
        Ok(Reply::Answered { answer }) => Ok(Json(AskResponse {
            reply: "answered".to_string(),
            answer: Some(answer),
            request_id: None,
        })),
        Ok(Reply::Escalated { request_id }) => Ok(Json(AskResponse {
            reply: "escalated".to_string(),
            answer: None,
            request_id: Some(request_id),
        })),
        Err(e) => {
            error!("question handling failed: {e}");
            Err((status_for(&e), Json(ApiError::new(e.code(), e.to_string()))))
        }
    }
}

/// List all help requests in insertion order
///
/// GET /api/v1/requests
pub async fn list_requests(State(state): State<AppState>) -> Json<ListRequestsResponse> {
    let requests = state.ledger.list_all();
    let total = requests.len();
    Json(ListRequestsResponse { requests, total })
}

/// Supervisor panel
///
/// GET /
pub async fn supervisor_panel(State(state): State<AppState>) -> Html<String> {
    Html(panel::render(&state.ledger.list_all(), None))
}

/// Submit a supervisor answer
///
/// POST /respond — redirects back to the panel on success; a rejected
/// submission re-renders the panel with an error banner instead of
/// silently doing nothing.
pub async fn respond(
    State(state): State<AppState>,
    Form(form): Form<RespondForm>,
) -> Result<Redirect, (StatusCode, Html<String>)> {
    match state.resolver.resolve(&form.request_id, &form.answer).await {
        Ok(_) => Ok(Redirect::to("/")),
        Err(e) => {
            error!(request_id = %form.request_id, "submission rejected: {e}");
            let page = panel::render(&state.ledger.list_all(), Some(&e.to_string()));
            Err((status_for(&e), Html(page)))
        }
    }
}

/// Liveness probe
///
/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Prometheus text exposition
///
/// GET /metrics
pub async fn metrics() -> String {
    METRICS.render()
}
