// ABOUTME: Shared application state for the devagent HTTP server.
// ABOUTME: Holds the task agent, the append-only session log, and provider status.

use std::sync::Arc;

use devagent_core::{Role, SessionLog};
use devagent_llm::{GenerationDelegate, create_runtime};
use tokio::sync::RwLock;

use crate::config::DevagentConfig;
use crate::providers::ProviderStatus;

/// The single entry point the shell calls per task submission. Either the
/// pure template assembler or the generation delegate, selected once at
/// startup from provider availability.
pub enum TaskAgent {
    Template,
    Delegate(GenerationDelegate),
}

impl TaskAgent {
    /// Process a task under a role. Total: the template agent cannot fail
    /// and the delegate falls back to its fixed response on error.
    pub async fn process_task(&self, task: &str, role: Role) -> String {
        match self {
            TaskAgent::Template => devagent_core::respond(task, role),
            TaskAgent::Delegate(delegate) => delegate.process_task(task, role).await,
        }
    }

    /// Short label for logging and the UI badge.
    pub fn kind(&self) -> &'static str {
        match self {
            TaskAgent::Template => "template",
            TaskAgent::Delegate(_) => "delegate",
        }
    }
}

/// Pick the agent implementation: the generation delegate when a provider is
/// configured and its runtime can be built, otherwise the template agent.
/// Degrades silently to templates, logging why.
pub fn build_agent(config: &DevagentConfig, status: &ProviderStatus) -> TaskAgent {
    if !status.any_available {
        tracing::info!("no generation provider configured, using template agent");
        return TaskAgent::Template;
    }

    match create_runtime(&config.provider, config.model.clone()) {
        Ok(runtime) => {
            tracing::info!(
                provider = runtime.provider_name(),
                model = runtime.model_name(),
                "using generation delegate"
            );
            TaskAgent::Delegate(GenerationDelegate::new(runtime))
        }
        Err(e) => {
            tracing::warn!(
                "failed to build {} runtime, using template agent: {e}",
                config.provider
            );
            TaskAgent::Template
        }
    }
}

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub agent: TaskAgent,
    pub session: RwLock<SessionLog>,
    pub provider_status: ProviderStatus,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState with an empty session log.
    pub fn new(agent: TaskAgent, provider_status: ProviderStatus) -> Self {
        Self {
            agent,
            session: RwLock::new(SessionLog::new()),
            provider_status,
        }
    }
}
