//! Query embedding module
//!
//! Turns user questions into fixed-dimension vectors via the hosted
//! Google Generative Language embedding API.
//!
//! Queries are embedded with the `RETRIEVAL_QUERY` task type, which must
//! match the `RETRIEVAL_DOCUMENT` encoding used when the corpus was indexed;
//! mixing the two silently degrades retrieval quality.

pub mod client;

pub use client::EmbeddingClient;

/// Embedding dimension of text-embedding-004
pub const DEFAULT_EMBEDDING_DIM: usize = 768;
