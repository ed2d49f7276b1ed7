// ABOUTME: Defines the GenerateRuntime trait that all text-generation adapters implement.
// ABOUTME: Also defines GenerateError, the set of failures a generation call can produce.

use async_trait::async_trait;

/// Errors that can occur during a generation call. Callers treat every
/// variant the same way (fall back); the split exists for logging.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limited")]
    RateLimited,
}

/// Trait for text-generation backends. Each adapter (hosted inference API,
/// local runtime) turns a prompt string into generated text or fails.
/// Calls may block indefinitely; no timeout is applied here.
#[async_trait]
pub trait GenerateRuntime: Send + Sync {
    /// Generate text for a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    /// Provider name for logging and display (e.g. "huggingface", "ollama").
    fn provider_name(&self) -> &str;

    /// Model identifier being used.
    fn model_name(&self) -> &str;
}
