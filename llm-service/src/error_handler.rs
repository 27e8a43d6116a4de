//! Unified error handling for `llm-service`.
//!
//! All messages include the prefix `[LLM Service]` to simplify attribution
//! in logs.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias for chat operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors produced by the chat-completion boundary.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LlmError {
    /// Invalid endpoint (empty or missing http/https).
    #[error("[LLM Service] invalid chat endpoint: {0}")]
    InvalidEndpoint(String),

    /// Failed to parse an environment variable into the expected type.
    #[error("[LLM Service] invalid number in {var}: {value}")]
    EnvParse {
        /// Variable name (e.g., `CHAT_TIMEOUT_SECS`).
        var: &'static str,
        /// Offending value.
        value: String,
    },

    /// Transport/HTTP client error.
    #[error("[LLM Service] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-successful HTTP status from upstream.
    #[error("[LLM Service] unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body.
        snippet: String,
    },

    /// Unexpected/invalid JSON response.
    #[error("[LLM Service] failed to decode response: {0}")]
    Decode(String),
}
