// ABOUTME: Task submission and history handlers for the JSON API.
// ABOUTME: Invalid roles fail with 422; successful submissions append to the session log.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use devagent_core::Role;
use serde::{Deserialize, Serialize};

use crate::app_state::SharedState;

/// Request body for submitting a task.
#[derive(Debug, Deserialize)]
pub struct SubmitTaskRequest {
    pub task: String,
    pub role: String,
}

/// Response body after processing a task.
#[derive(Debug, Serialize)]
pub struct SubmitTaskResponse {
    pub entry_id: String,
    pub role: Role,
    pub response: String,
}

/// One history record in the list endpoint.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub entry_id: String,
    pub role: Role,
    pub task: String,
    pub response: String,
    pub created_at: String,
}

/// POST /api/tasks - Process a task under a role and record it.
pub async fn submit_task(
    State(state): State<SharedState>,
    Json(req): Json<SubmitTaskRequest>,
) -> impl IntoResponse {
    let role: Role = match req.role.parse() {
        Ok(role) => role,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    let task = req.task.trim();
    if task.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": "task cannot be empty" })),
        )
            .into_response();
    }

    let response = state.agent.process_task(task, role).await;
    let entry_id = state
        .session
        .write()
        .await
        .append(role, task.to_string(), response.clone());

    (
        StatusCode::CREATED,
        Json(SubmitTaskResponse {
            entry_id: entry_id.to_string(),
            role,
            response,
        }),
    )
        .into_response()
}

/// GET /api/history - List past submissions, newest first.
pub async fn history(State(state): State<SharedState>) -> Json<Vec<HistoryEntry>> {
    let session = state.session.read().await;
    let entries = session
        .newest_first()
        .map(|e| HistoryEntry {
            entry_id: e.entry_id.to_string(),
            role: e.role,
            task: e.task.clone(),
            response: e.response.clone(),
            created_at: e.created_at.to_rfc3339(),
        })
        .collect();
    Json(entries)
}
