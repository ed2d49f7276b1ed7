// ABOUTME: Ollama local runtime adapter implementing the GenerateRuntime trait.
// ABOUTME: Posts to the local /api/generate endpoint with streaming disabled.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::runtime::{GenerateError, GenerateRuntime};

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "mistral";

/// Local language-model runtime adapter. No credential required; the
/// runtime is expected to listen on localhost.
pub struct OllamaRuntime {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaRuntime {
    /// Create a runtime reading configuration from environment variables.
    /// Optional: `OLLAMA_BASE_URL` (defaults to http://localhost:11434)
    /// Optional: `OLLAMA_MODEL` (defaults to mistral)
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(base_url, model)
    }

    /// Create a runtime with explicit configuration.
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            model,
        }
    }

    /// Replace the model identifier.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Build the JSON request body. Streaming is disabled so the response
    /// arrives as a single object.
    pub fn build_request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false
        })
    }

    /// Parse a generate response into text; the field is `response`.
    pub fn parse_response(response_body: &Value) -> Result<String, GenerateError> {
        response_body
            .get("response")
            .and_then(|r| r.as_str())
            .map(String::from)
            .ok_or_else(|| {
                GenerateError::InvalidResponse("missing response field".to_string())
            })
    }
}

#[async_trait]
impl GenerateRuntime for OllamaRuntime {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = self.build_request_body(prompt);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::ProviderError(format!("HTTP request failed: {e}")))?;

        let status = response.status();

        if status.is_server_error() {
            return Err(GenerateError::ProviderError(format!("Server error: {status}")));
        }

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(GenerateError::ProviderError(format!(
                "API error {status}: {error_body}"
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| GenerateError::InvalidResponse(format!("failed to parse JSON: {e}")))?;

        Self::parse_response(&response_body)
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
