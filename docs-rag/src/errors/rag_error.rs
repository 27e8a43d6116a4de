//! Unified error type for the docs-rag crate.

use thiserror::Error;

/// Errors produced by the retrieval layer.
#[derive(Debug, Error)]
pub enum RagError {
    // ── Configuration / environment ──────────────────────────────────────────
    /// Failed to parse an environment variable into the expected type.
    #[error("failed to parse env variable: {key} = '{value}'")]
    EnvParse { key: String, value: String },

    /// Configuration combination is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Embeddings backend ──────────────────────────────────────────────────
    /// Embedding backend failed to initialize or to embed inputs.
    #[error("embedding error: {0}")]
    Embedding(String),

    // ── Qdrant client / transport ───────────────────────────────────────────
    /// Transport / client error from Qdrant.
    #[error("qdrant error: {0}")]
    Qdrant(String),
}
