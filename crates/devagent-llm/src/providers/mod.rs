// ABOUTME: Provider module aggregating text-generation runtime adapters.
// ABOUTME: Each sub-module implements GenerateRuntime for a specific backend.

pub mod huggingface;
pub mod ollama;

use std::sync::Arc;

use crate::runtime::{GenerateError, GenerateRuntime};

use huggingface::HuggingFaceRuntime;
use ollama::OllamaRuntime;

/// Build a runtime for the named provider, reading credentials and base
/// URLs from the environment. An explicit model overrides the env default.
pub fn create_runtime(
    provider: &str,
    model: Option<String>,
) -> Result<Arc<dyn GenerateRuntime>, GenerateError> {
    match provider {
        "huggingface" => {
            let mut runtime = HuggingFaceRuntime::from_env()?;
            if let Some(model) = model {
                runtime = runtime.with_model(model);
            }
            Ok(Arc::new(runtime))
        }
        "ollama" => {
            let mut runtime = OllamaRuntime::from_env();
            if let Some(model) = model {
                runtime = runtime.with_model(model);
            }
            Ok(Arc::new(runtime))
        }
        other => Err(GenerateError::ProviderError(format!(
            "unknown provider: {other}"
        ))),
    }
}
