//! Qdrant vector DB helpers: connection lifecycle and top-K search using the
//! modern `qdrant_client` API.
//!
//! This module only does DB I/O: it connects over gRPC and maps scored points
//! into [`RetrievedItem`]s. Payload fields are read best-effort; missing or
//! mistyped values fall back to empty strings.

use std::{collections::HashMap, future::Future, pin::Pin};

use qdrant_client::Qdrant;
use qdrant_client::qdrant::SearchPointsBuilder;
use tracing::debug;

use crate::errors::rag_error::RagError;
use crate::structs::rag_config::RagConfig;
use crate::structs::retrieved_item::{ItemMetadata, RetrievedItem};

/// Asynchronous nearest-neighbor index.
///
/// [`DocIndex`] is the Qdrant-backed implementation; tests substitute doubles.
pub trait ContextIndex: Send + Sync {
    /// Query the index with one embedding vector, requesting at most `limit`
    /// matches, ranked by similarity.
    fn search<'a>(
        &'a self,
        vector: Vec<f32>,
        limit: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RetrievedItem>, RagError>> + Send + 'a>>;
}

/// Qdrant-backed documentation index.
pub struct DocIndex {
    client: Qdrant,
    collection: String,
    dim: usize,
}

impl DocIndex {
    /// Establish a gRPC connection to Qdrant using `cfg.qdrant.url`.
    ///
    /// This call does not touch any collections.
    ///
    /// # Errors
    /// Returns `RagError::Qdrant` if the client cannot be constructed.
    pub fn new(cfg: &RagConfig) -> Result<Self, RagError> {
        let client = Qdrant::from_url(&cfg.qdrant.url)
            .build()
            .map_err(|e| RagError::Qdrant(format!("client build: {e}")))?;

        Ok(Self {
            client,
            collection: cfg.qdrant.collection.clone(),
            dim: cfg.embedding.dim,
        })
    }

    /// Run k-NN search for a query vector and return payload-mapped items.
    ///
    /// # Errors
    /// - `InvalidConfig` if the query vector length mismatches `EMBEDDING_DIM`.
    /// - `Qdrant` on transport/server errors.
    pub async fn search_top_k(
        &self,
        query_vec: Vec<f32>,
        limit: u64,
    ) -> Result<Vec<RetrievedItem>, RagError> {
        if query_vec.len() != self.dim {
            return Err(RagError::InvalidConfig(format!(
                "query vector length {} != EMBEDDING_DIM {}",
                query_vec.len(),
                self.dim
            )));
        }

        let builder =
            SearchPointsBuilder::new(&self.collection, query_vec, limit).with_payload(true);

        let resp = self
            .client
            .search_points(builder)
            .await
            .map_err(|e| RagError::Qdrant(format!("search_points: {e}")))?;

        debug!(
            target: "docs_rag::search",
            collection = %self.collection,
            hits = resp.result.len(),
            "search_top_k: qdrant responded"
        );

        Ok(resp
            .result
            .into_iter()
            .map(map_scored_point_to_item)
            .collect())
    }
}

impl ContextIndex for DocIndex {
    fn search<'a>(
        &'a self,
        vector: Vec<f32>,
        limit: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RetrievedItem>, RagError>> + Send + 'a>> {
        Box::pin(self.search_top_k(vector, limit))
    }
}

/// Read a string field from a Qdrant payload; non-string or absent → `""`.
fn payload_str(payload: &HashMap<String, qdrant_client::qdrant::Value>, key: &str) -> String {
    match payload.get(key) {
        Some(v) => {
            let json = v.clone().into_json();
            json.as_str().map(|s| s.to_owned()).unwrap_or_default()
        }
        None => String::new(),
    }
}

/// Map a `ScoredPoint` into a [`RetrievedItem`], extracting payload best-effort.
fn map_scored_point_to_item(sp: qdrant_client::qdrant::ScoredPoint) -> RetrievedItem {
    // Extract ID in a stable string form.
    let id = if let Some(pid) = sp.id {
        match pid.point_id_options {
            Some(qdrant_client::qdrant::point_id::PointIdOptions::Uuid(s)) => s,
            Some(qdrant_client::qdrant::point_id::PointIdOptions::Num(n)) => n.to_string(),
            None => String::new(),
        }
    } else {
        String::new()
    };

    let text = payload_str(&sp.payload, "text");
    let metadata = ItemMetadata {
        page_title: payload_str(&sp.payload, "page_title"),
        url: payload_str(&sp.payload, "url"),
        section_title: payload_str(&sp.payload, "section_title"),
    };

    RetrievedItem { id, text, metadata }
}
