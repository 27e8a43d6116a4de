//! Typed error for the qa-gateway crate.

use thiserror::Error;

/// Pipeline errors. Chat failures never appear here: they are absorbed into
/// the answer string by design.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Errors from the retrieval layer (embedding or vector search).
    #[error("RAG error: {0}")]
    Rag(#[from] docs_rag::RagError),
}
