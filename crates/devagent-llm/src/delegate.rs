// ABOUTME: GenerationDelegate forwarding role prompts to a runtime with a fixed fallback.
// ABOUTME: First failure is terminal for the call; no retries, no timeout, no backoff.

use std::sync::Arc;

use devagent_core::{Role, extract_mermaid};

use crate::prompts::render_prompt;
use crate::runtime::GenerateRuntime;

/// The fixed, role-independent response returned when generation fails.
/// Returned byte-exact; no post-processing is applied to it.
pub const FALLBACK_RESPONSE: &str =
    "Unable to generate response using LLM. Using fallback template.";

/// Default diagram prepended to architect responses that arrive without an
/// embedded mermaid block.
const DEFAULT_DIAGRAM: &str = "```mermaid\ngraph TD\n    A[Client] --> B[API Gateway]\n    B --> C[Service Layer]\n    C --> D[Database]\n```";

/// Forwards a role-specific prompt to a generation runtime. Stateless apart
/// from the runtime handle; at most one outstanding call per invocation.
pub struct GenerationDelegate {
    runtime: Arc<dyn GenerateRuntime>,
}

impl GenerationDelegate {
    pub fn new(runtime: Arc<dyn GenerateRuntime>) -> Self {
        Self { runtime }
    }

    pub fn provider_name(&self) -> &str {
        self.runtime.provider_name()
    }

    pub fn model_name(&self) -> &str {
        self.runtime.model_name()
    }

    /// Process a task: render the role prompt, make a single generate call,
    /// and fall back to the fixed response on any error. Architect responses
    /// without a mermaid block get the default diagram prepended.
    pub async fn process_task(&self, task: &str, role: Role) -> String {
        let prompt = render_prompt(role, task);

        match self.runtime.generate(&prompt).await {
            Ok(text) => {
                if role == Role::Architect && extract_mermaid(&text).is_none() {
                    format!("{DEFAULT_DIAGRAM}\n\n{text}")
                } else {
                    text
                }
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.runtime.provider_name(),
                    model = self.runtime.model_name(),
                    "generation failed, using fallback: {e}"
                );
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}
