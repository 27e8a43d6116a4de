//! Public API types re-used by the front ends (HTTP API, CLI).

use docs_rag::RetrievedItem;

/// Options that control retrieval for a single question.
///
/// Setting `top_k` to `0` means: "use the built-in default".
#[derive(Clone, Copy, Debug, Default)]
pub struct AskOptions {
    /// Number of nearest-neighbor candidates to request from the index.
    pub top_k: u64,
}

/// Final answer together with the exact context passed to the model.
#[derive(Clone, Debug)]
pub struct QaAnswer {
    /// Model reply, fallback sentence, or absorbed chat-failure message.
    pub answer: String,
    /// Retrieved items in ranking order; empty when nothing matched.
    pub context: Vec<RetrievedItem>,
}
