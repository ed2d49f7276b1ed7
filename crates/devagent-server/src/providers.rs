// ABOUTME: Generation provider status detection for the devagent UI.
// ABOUTME: Reads environment variables to determine which backends are configured.

use serde::Serialize;

/// Status of a single generation backend.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInfo {
    pub name: String,
    pub configured: bool,
    pub model: String,
}

/// Overall provider status for the UI. Never exposes credential values.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderStatus {
    pub default_provider: String,
    pub default_model: Option<String>,
    pub providers: Vec<ProviderInfo>,
    pub any_available: bool,
}

impl ProviderStatus {
    /// Detect available generation backends from environment variables.
    ///
    /// Checks for:
    /// - HUGGINGFACE_TOKEN / HUGGINGFACE_MODEL (hosted inference)
    /// - OLLAMA_BASE_URL / OLLAMA_MODEL (local runtime; configured when the
    ///   base URL is set explicitly)
    /// - DEVAGENT_PROVIDER / DEVAGENT_MODEL (defaults)
    pub fn detect() -> Self {
        let default_provider = std::env::var("DEVAGENT_PROVIDER")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "huggingface".to_string());
        let default_model = std::env::var("DEVAGENT_MODEL").ok().filter(|m| !m.is_empty());

        let huggingface_configured = std::env::var("HUGGINGFACE_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .is_some();
        let huggingface_model = std::env::var("HUGGINGFACE_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "mistralai/Mistral-7B-Instruct-v0.2".to_string());

        let ollama_configured = std::env::var("OLLAMA_BASE_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .is_some();
        let ollama_model = std::env::var("OLLAMA_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "mistral".to_string());

        let providers = vec![
            ProviderInfo {
                name: "huggingface".to_string(),
                configured: huggingface_configured,
                model: huggingface_model,
            },
            ProviderInfo {
                name: "ollama".to_string(),
                configured: ollama_configured,
                model: ollama_model,
            },
        ];

        let any_available = providers.iter().any(|p| p.configured);

        Self {
            default_provider,
            default_model,
            providers,
            any_available,
        }
    }

    /// Status with no backends configured; the template agent handles tasks.
    pub fn none() -> Self {
        Self {
            default_provider: "huggingface".to_string(),
            default_model: None,
            providers: vec![],
            any_available: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize provider tests that manipulate process-wide env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Clear all provider-related env vars so tests start from a clean slate.
    ///
    /// SAFETY: Only call while holding ENV_MUTEX to prevent concurrent env var access.
    unsafe fn clear_provider_env() {
        // SAFETY: caller holds ENV_MUTEX, ensuring no concurrent env var access
        unsafe {
            std::env::remove_var("DEVAGENT_PROVIDER");
            std::env::remove_var("DEVAGENT_MODEL");
            std::env::remove_var("HUGGINGFACE_TOKEN");
            std::env::remove_var("HUGGINGFACE_MODEL");
            std::env::remove_var("OLLAMA_BASE_URL");
            std::env::remove_var("OLLAMA_MODEL");
        }
    }

    #[test]
    fn detect_with_no_env_vars() {
        let _lock = ENV_MUTEX.lock().unwrap();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            clear_provider_env();
        }

        let status = ProviderStatus::detect();

        assert_eq!(status.default_provider, "huggingface");
        assert!(status.default_model.is_none());
        assert!(!status.any_available);
        assert_eq!(status.providers.len(), 2);

        let hf = &status.providers[0];
        assert_eq!(hf.name, "huggingface");
        assert!(!hf.configured);
        assert_eq!(hf.model, "mistralai/Mistral-7B-Instruct-v0.2");

        let ollama = &status.providers[1];
        assert_eq!(ollama.name, "ollama");
        assert!(!ollama.configured);
        assert_eq!(ollama.model, "mistral");
    }

    #[test]
    fn detect_finds_configured_token() {
        let _lock = ENV_MUTEX.lock().unwrap();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            clear_provider_env();
            std::env::set_var("HUGGINGFACE_TOKEN", "hf-test-not-real");
        }

        let status = ProviderStatus::detect();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            std::env::remove_var("HUGGINGFACE_TOKEN");
        }

        assert!(status.any_available);
        assert!(status.providers[0].configured);
        assert!(!status.providers[1].configured);
    }

    #[test]
    fn detect_ignores_empty_token() {
        let _lock = ENV_MUTEX.lock().unwrap();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            clear_provider_env();
            std::env::set_var("HUGGINGFACE_TOKEN", "");
        }

        let status = ProviderStatus::detect();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            std::env::remove_var("HUGGINGFACE_TOKEN");
        }

        assert!(!status.any_available);
    }

    #[test]
    fn detect_treats_ollama_base_url_as_configured() {
        let _lock = ENV_MUTEX.lock().unwrap();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            clear_provider_env();
            std::env::set_var("OLLAMA_BASE_URL", "http://localhost:11434");
            std::env::set_var("OLLAMA_MODEL", "codellama");
        }

        let status = ProviderStatus::detect();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            std::env::remove_var("OLLAMA_BASE_URL");
            std::env::remove_var("OLLAMA_MODEL");
        }

        assert!(status.any_available);
        assert!(status.providers[1].configured);
        assert_eq!(status.providers[1].model, "codellama");
    }
}
