//! RAG (Retrieval-Augmented Generation) module
//!
//! This module provides the end-to-end grounded question-answering flow:
//! - Query embedding
//! - Nearest-neighbor retrieval from the vector index
//! - Context assembly with a similarity threshold
//! - Grounded prompt rendering and LLM answer generation
//!
//! # Examples
//!
//! ```rust,no_run
//! use policyrag::config::AppConfig;
//! use policyrag::models::Credentials;
//! use policyrag::rag::RagService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let credentials = Credentials::new("google-key", "pinecone-key");
//!     let service = RagService::new(&config, &credentials)?;
//!
//!     let response = service.query("How many vacation days do new hires get?").await?;
//!     println!("Answer: {}", response.answer);
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod pipeline;
pub mod prompts;

pub use context::ContextAssembler;
pub use context::NO_CONTEXT_SENTINEL;
pub use context::SCORE_THRESHOLD;
pub use pipeline::RagResponse;
pub use pipeline::RagService;
pub use prompts::build_grounded_prompt;
pub use prompts::NOT_FOUND_PHRASE;
