//! Retrieval layer for the documentation Q&A backend.
//!
//! Public API:
//! - [`retrieve`]: embed a query, run one k-NN search, normalize the matches.
//! - [`OllamaEmbedder`] / [`DocIndex`]: the production providers behind the
//!   [`EmbeddingsProvider`] and [`ContextIndex`] seams.

mod embedding;
pub mod errors;
pub mod structs;
mod vector_db;

use tracing::info;

pub use embedding::{EmbeddingsProvider, OllamaEmbedder};
pub use errors::rag_error::RagError;
pub use structs::rag_config::RagConfig;
pub use structs::retrieved_item::{ItemMetadata, RetrievedItem};
pub use vector_db::{ContextIndex, DocIndex};

/// Embed `query` and fetch its `top_k` nearest documentation chunks.
///
/// Items come back in the index's ranking order (highest similarity first)
/// and are neither deduplicated nor re-ranked. The caller is responsible for
/// rejecting empty queries before calling this.
///
/// # Errors
/// Propagates embedding and Qdrant failures as [`RagError`].
pub async fn retrieve(
    embedder: &dyn EmbeddingsProvider,
    index: &dyn ContextIndex,
    query: &str,
    top_k: u64,
) -> Result<Vec<RetrievedItem>, RagError> {
    info!(
        target: "docs_rag::search",
        query = %query,
        top_k,
        "retrieve: start"
    );

    let query_vec = embedder.embed(query).await?;

    let items = index.search(query_vec, top_k).await?;

    info!(
        target: "docs_rag::search",
        hits = items.len(),
        "retrieve: finished"
    );

    Ok(items)
}
