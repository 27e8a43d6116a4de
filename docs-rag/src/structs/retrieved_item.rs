use serde::{Deserialize, Serialize};

/// One documentation chunk returned by the vector index.
///
/// This struct is returned from the public retrieval API and serialized to
/// JSON for HTTP responses. Items keep the index's ranking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedItem {
    /// Opaque point identifier from the index (UUID or numeric, as a string).
    pub id: String,

    /// Chunk body text.
    pub text: String,

    /// Optional metadata stored alongside the chunk.
    pub metadata: ItemMetadata,
}

/// Payload metadata of a chunk. Absent fields default to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Title of the source page.
    #[serde(default)]
    pub page_title: String,

    /// Source URL of the page the chunk came from.
    #[serde(default)]
    pub url: String,

    /// Title of the section within the page.
    #[serde(default)]
    pub section_title: String,
}
