pub mod rag_config;
pub mod retrieved_item;
