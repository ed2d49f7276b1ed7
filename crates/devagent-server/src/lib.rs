// ABOUTME: HTTP server for devagent, providing the browser UI and a JSON API.
// ABOUTME: Uses Axum with shared state holding the task agent and session log.

pub mod api;
pub mod app_state;
pub mod config;
pub mod providers;
pub mod routes;
pub mod web;

pub use app_state::{AppState, SharedState, TaskAgent, build_agent};
pub use config::{ConfigError, DevagentConfig};
pub use providers::ProviderStatus;
pub use routes::create_router;
