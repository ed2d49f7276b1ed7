// ABOUTME: Configuration loading for the devagent server.
// ABOUTME: Reads environment variables with defaults and validates the bind address.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DEVAGENT_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DevagentConfig {
    pub bind: SocketAddr,
    pub provider: String,
    pub model: Option<String>,
}

impl DevagentConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - DEVAGENT_BIND: socket address to bind (default: 127.0.0.1:8750)
    /// - DEVAGENT_PROVIDER: generation provider (default: huggingface)
    /// - DEVAGENT_MODEL: model identifier override (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_str =
            std::env::var("DEVAGENT_BIND").unwrap_or_else(|_| "127.0.0.1:8750".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let provider = std::env::var("DEVAGENT_PROVIDER")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "huggingface".to_string());

        let model = std::env::var("DEVAGENT_MODEL").ok().filter(|m| !m.is_empty());

        Ok(Self {
            bind,
            provider,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serializes tests that mutate process-wide env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn config_loads_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            std::env::remove_var("DEVAGENT_BIND");
            std::env::remove_var("DEVAGENT_PROVIDER");
            std::env::remove_var("DEVAGENT_MODEL");
        }

        let config = DevagentConfig::from_env().unwrap();

        assert_eq!(config.bind, "127.0.0.1:8750".parse::<SocketAddr>().unwrap());
        assert_eq!(config.provider, "huggingface");
        assert!(config.model.is_none());
    }

    #[test]
    fn config_rejects_invalid_bind() {
        let _lock = ENV_MUTEX.lock().unwrap();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            std::env::set_var("DEVAGENT_BIND", "not-an-address");
        }

        let result = DevagentConfig::from_env();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            std::env::remove_var("DEVAGENT_BIND");
        }

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not-an-address"));
    }

    #[test]
    fn config_reads_provider_override() {
        let _lock = ENV_MUTEX.lock().unwrap();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            std::env::remove_var("DEVAGENT_BIND");
            std::env::set_var("DEVAGENT_PROVIDER", "ollama");
            std::env::set_var("DEVAGENT_MODEL", "codellama");
        }

        let config = DevagentConfig::from_env().unwrap();

        // SAFETY: holding ENV_MUTEX, no concurrent env var access
        unsafe {
            std::env::remove_var("DEVAGENT_PROVIDER");
            std::env::remove_var("DEVAGENT_MODEL");
        }

        assert_eq!(config.provider, "ollama");
        assert_eq!(config.model.as_deref(), Some("codellama"));
    }
}
