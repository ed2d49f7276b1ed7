// ABOUTME: Generation delegate for devagent, forwarding role prompts to an LLM runtime.
// ABOUTME: Defines the runtime trait, provider adapters, and the fail-open fallback.

pub mod delegate;
pub mod prompts;
pub mod providers;
pub mod runtime;

pub use delegate::{FALLBACK_RESPONSE, GenerationDelegate};
pub use prompts::render_prompt;
pub use providers::create_runtime;
pub use runtime::{GenerateError, GenerateRuntime};
