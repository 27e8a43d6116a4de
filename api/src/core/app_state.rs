//! Shared state for all HTTP handlers.

use docs_rag::{DocIndex, OllamaEmbedder, RagConfig};
use llm_service::{LlmModelConfig, OllamaChatService};

use crate::error_handler::AppError;

/// Process-wide client handles, constructed once at startup and accessed
/// read-only by every request.
pub struct AppState {
    /// Query embedding client.
    pub embedder: OllamaEmbedder,
    /// Qdrant-backed documentation index.
    pub index: DocIndex,
    /// Hosted chat-completion client.
    pub chat: OllamaChatService,
    /// Default number of matches requested per query.
    pub top_k: u64,
}

impl AppState {
    /// Load shared state from environment variables and build the clients.
    pub fn from_env() -> Result<Self, AppError> {
        let rag_cfg = RagConfig::from_env()?;
        let llm_cfg = LlmModelConfig::from_env()?;

        let embedder = OllamaEmbedder::new(&rag_cfg)?;
        let index = DocIndex::new(&rag_cfg)?;
        let chat = OllamaChatService::new(llm_cfg)?;

        Ok(Self {
            embedder,
            index,
            chat,
            top_k: rag_cfg.search.top_k,
        })
    }
}
