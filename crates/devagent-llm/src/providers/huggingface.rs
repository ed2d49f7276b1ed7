// ABOUTME: Hugging Face Inference API adapter implementing the GenerateRuntime trait.
// ABOUTME: Posts the prompt with a bearer token and parses the generated_text response.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::runtime::{GenerateError, GenerateRuntime};

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// Hosted inference adapter. Calls the Hugging Face Inference API with a
/// bearer credential read from the environment.
pub struct HuggingFaceRuntime {
    client: reqwest::Client,
    token: String,
    base_url: String,
    model: String,
}

impl HuggingFaceRuntime {
    /// Create a runtime reading configuration from environment variables.
    /// Required: `HUGGINGFACE_TOKEN`
    /// Optional: `HUGGINGFACE_BASE_URL` (defaults to the public inference API)
    /// Optional: `HUGGINGFACE_MODEL` (defaults to mistralai/Mistral-7B-Instruct-v0.2)
    pub fn from_env() -> Result<Self, GenerateError> {
        let token = std::env::var("HUGGINGFACE_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| GenerateError::MissingCredential("HUGGINGFACE_TOKEN".to_string()))?;

        let base_url = std::env::var("HUGGINGFACE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model =
            std::env::var("HUGGINGFACE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self::new(token, base_url, model))
    }

    /// Create a runtime with explicit configuration.
    pub fn new(token: String, base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url,
            model,
        }
    }

    /// Replace the model identifier.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Build the JSON request body for the inference API.
    pub fn build_request_body(prompt: &str) -> Value {
        json!({ "inputs": prompt })
    }

    /// Parse an inference API response into generated text. The API returns
    /// an array of objects with a `generated_text` field.
    pub fn parse_response(response_body: &Value) -> Result<String, GenerateError> {
        response_body
            .get(0)
            .and_then(|entry| entry.get("generated_text"))
            .and_then(|t| t.as_str())
            .map(String::from)
            .ok_or_else(|| {
                GenerateError::InvalidResponse(
                    "missing generated_text in response".to_string(),
                )
            })
    }
}

#[async_trait]
impl GenerateRuntime for HuggingFaceRuntime {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = format!("{}/models/{}", self.base_url, self.model);
        let body = Self::build_request_body(prompt);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::ProviderError(format!("HTTP request failed: {e}")))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerateError::RateLimited);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GenerateError::ProviderError(
                "Unauthorized: check HUGGINGFACE_TOKEN".to_string(),
            ));
        }

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
        "huggingface"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
