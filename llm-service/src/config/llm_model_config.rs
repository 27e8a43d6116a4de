//! Chat model configuration loaded from environment variables.

use tracing::warn;

use crate::error_handler::LlmError;

/// Configuration of the remote chat-completion model.
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// Base URL of the chat endpoint (e.g., "https://ollama.com").
    pub endpoint: String,
    /// Model identifier (e.g., "deepseek-v3.1:671b").
    pub model: String,
    /// Bearer credential. An empty string sends an empty token, matching the
    /// upstream behavior when the variable is unset.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl LlmModelConfig {
    /// Build from environment variables.
    ///
    /// Environment variables used:
    /// - `CHAT_ENDPOINT` (default: "https://ollama.com")
    /// - `CHAT_MODEL` (default: "deepseek-v3.1:671b")
    /// - `OLLAMA_API_KEY` (default: empty; read once at startup)
    /// - `CHAT_TIMEOUT_SECS` (default: 120)
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("OLLAMA_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!(
                target: "llm_service::config",
                "OLLAMA_API_KEY is not set; chat requests will carry an empty bearer token"
            );
        }

        let timeout_secs = match std::env::var("CHAT_TIMEOUT_SECS") {
            Ok(v) => v.parse::<u64>().map_err(|_| LlmError::EnvParse {
                var: "CHAT_TIMEOUT_SECS",
                value: v,
            })?,
            Err(_) => 120,
        };

        Ok(Self {
            endpoint: std::env::var("CHAT_ENDPOINT")
                .unwrap_or_else(|_| "https://ollama.com".into()),
            model: std::env::var("CHAT_MODEL").unwrap_or_else(|_| "deepseek-v3.1:671b".into()),
            api_key,
            timeout_secs,
        })
    }
}
