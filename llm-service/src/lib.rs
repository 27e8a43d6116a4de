//! Chat-completion boundary for the documentation Q&A backend.
//!
//! One provider (hosted Ollama, bearer-authenticated), one typed contract:
//! [`ChatProvider::chat`] returns `Result<String, LlmError>`. Response-shape
//! tolerance lives inside the client, not at call sites.

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::LlmError;
pub use services::ollama_chat_service::{ChatProvider, OllamaChatService};
