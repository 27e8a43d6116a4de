use docs_rag::RetrievedItem;
use serde::{Deserialize, Serialize};

/// Request payload for /query.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Natural language question. A missing field counts as empty and is
    /// rejected with a 400.
    #[serde(default)]
    pub query: String,
}

/// Response payload for /query.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    /// Echo of the submitted question.
    pub query: String,
    /// Final answer (model reply, fallback sentence, or absorbed chat error).
    pub answer: String,
    /// Number of context chunks fed to the model.
    pub context_count: usize,
    /// The retrieved chunks in ranking order.
    pub context_results: Vec<RetrievedItem>,
}
