//! Ollama-based query embedding.
//!
//! The query is embedded via `POST {OLLAMA_URL}/api/embeddings`. The provider
//! seam ([`EmbeddingsProvider`]) exists so the pipeline can run against a
//! test double instead of a live server.

use std::{future::Future, pin::Pin, time::Duration};

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::errors::rag_error::RagError;
use crate::structs::rag_config::RagConfig;

/// Asynchronous embedding provider.
///
/// Implement this trait to plug in another embedding backend or a test double.
pub trait EmbeddingsProvider: Send + Sync {
    /// Embed one text into a fixed-dimensionality vector.
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, RagError>> + Send + 'a>>;
}

#[derive(Debug, Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct OllamaEmbedResponse {
    embedding: Vec<f32>,
}

/// Embedding provider backed by an Ollama server.
pub struct OllamaEmbedder {
    client: reqwest::Client,
    url: String,
    model: String,
    dim: usize,
}

impl OllamaEmbedder {
    /// Construct a new embedder from the retrieval configuration.
    ///
    /// # Errors
    /// Returns `RagError::Embedding` if the HTTP client cannot be built.
    pub fn new(cfg: &RagConfig) -> Result<Self, RagError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| RagError::Embedding(format!("http client build: {e}")))?;

        let base = cfg.embedding.url.trim_end_matches('/');
        Ok(Self {
            client,
            url: format!("{base}/api/embeddings"),
            model: cfg.embedding.model.clone(),
            dim: cfg.embedding.dim,
        })
    }

    async fn embed_one(&self, text: &str) -> Result<Vec<f32>, RagError> {
        let req = OllamaEmbedRequest {
            model: &self.model,
            prompt: text,
        };

        let resp = self
            .client
            .post(&self.url)
            .json(&req)
            .send()
            .await
            .map_err(|e| RagError::Embedding(format!("POST {}: {e}", self.url)))?;

        if resp.status() != StatusCode::OK {
            let code = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".into());
            return Err(RagError::Embedding(format!(
                "ollama embeddings non-200: {code}; body: {body}"
            )));
        }

        let parsed: OllamaEmbedResponse = resp
            .json()
            .await
            .map_err(|e| RagError::Embedding(format!("parse embeddings json: {e}")))?;

        if parsed.embedding.len() != self.dim {
            return Err(RagError::Embedding(format!(
                "embedding dim {} != expected {} (model: {})",
                parsed.embedding.len(),
                self.dim,
                self.model
            )));
        }

        Ok(parsed.embedding)
    }
}

impl EmbeddingsProvider for OllamaEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, RagError>> + Send + 'a>> {
        Box::pin(self.embed_one(text))
    }
}
