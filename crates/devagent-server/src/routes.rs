// ABOUTME: Route definitions for the devagent HTTP surface.
// ABOUTME: Assembles web UI and JSON API routes into a single Axum Router.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;
use crate::web;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(web::index))
        .route("/web/tasks", post(web::submit_task))
        .route("/web/history", get(web::history))
        .route("/web/provider-status", get(web::provider_status))
        .route("/api/tasks", post(api::tasks::submit_task))
        .route("/api/history", get(api::tasks::history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
