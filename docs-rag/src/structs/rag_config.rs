//! Configuration layer: reads runtime settings from environment variables
//! and exposes strongly typed configs for embeddings, Qdrant, and search.

use serde::{Deserialize, Serialize};

use crate::errors::rag_error::RagError;

/// Embedding configuration (endpoint, model, and dimension).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Base URL of the Ollama server used for embeddings.
    pub url: String,
    /// Embedding model identifier (e.g., "embeddinggemma:300m").
    pub model: String,
    /// Embedding vector dimensionality (e.g., 768 for embeddinggemma-300m).
    pub dim: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:11434".to_string(),
            model: "embeddinggemma:300m".to_string(),
            dim: 768,
        }
    }
}

/// Qdrant connectivity and collection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QdrantConfig {
    /// gRPC URL for Qdrant (e.g., "http://localhost:6334").
    pub url: String,
    /// Collection holding the documentation chunks.
    pub collection: String,
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:6334".to_string(),
            collection: "docs".to_string(),
        }
    }
}

/// Search behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default top-k results to request per query.
    pub top_k: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { top_k: 30 }
    }
}

/// Top-level runtime configuration for the retrieval layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Embeddings backend configuration.
    pub embedding: EmbeddingConfig,
    /// Qdrant connectivity & collection settings.
    pub qdrant: QdrantConfig,
    /// Search behavior settings.
    pub search: SearchConfig,
}

impl RagConfig {
    /// Build configuration from environment variables.
    ///
    /// Environment variables used:
    /// - `QDRANT_URL` (default: "http://localhost:6334")
    /// - `QDRANT_COLLECTION` (default: "docs")
    /// - `OLLAMA_URL` (default: "http://localhost:11434")
    /// - `EMBEDDING_MODEL` (default: "embeddinggemma:300m")
    /// - `EMBEDDING_DIM` (default: 768)
    /// - `RAG_TOP_K` (default: 30)
    pub fn from_env() -> Result<Self, RagError> {
        let embedding = EmbeddingConfig {
            url: std::env::var("OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".into()),
            model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "embeddinggemma:300m".into()),
            dim: read_usize_env("EMBEDDING_DIM", 768)?,
        };

        let qdrant = QdrantConfig {
            url: std::env::var("QDRANT_URL").unwrap_or_else(|_| "http://localhost:6334".into()),
            collection: std::env::var("QDRANT_COLLECTION").unwrap_or_else(|_| "docs".into()),
        };

        let search = SearchConfig {
            top_k: read_u64_env("RAG_TOP_K", 30)?,
        };

        // Basic validations
        if embedding.dim == 0 {
            return Err(RagError::InvalidConfig("EMBEDDING_DIM must be > 0".into()));
        }
        if search.top_k == 0 {
            return Err(RagError::InvalidConfig("RAG_TOP_K must be > 0".into()));
        }

        Ok(Self {
            embedding,
            qdrant,
            search,
        })
    }
}

/// Read a `usize` from env, falling back to `default` when unset.
fn read_usize_env(key: &str, default: usize) -> Result<usize, RagError> {
    match std::env::var(key) {
        Ok(v) => v.parse::<usize>().map_err(|_| RagError::EnvParse {
            key: key.into(),
            value: v,
        }),
        Err(_) => Ok(default),
    }
}

/// Read a `u64` from env, falling back to `default` when unset.
fn read_u64_env(key: &str, default: u64) -> Result<u64, RagError> {
    match std::env::var(key) {
        Ok(v) => v.parse::<u64>().map_err(|_| RagError::EnvParse {
            key: key.into(),
            value: v,
        }),
        Err(_) => Ok(default),
    }
}
