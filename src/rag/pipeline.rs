//! Complete RAG pipeline: Embed -> Retrieve -> Assemble -> Generate

use tracing::debug;
use tracing::info;

use crate::config::AppConfig;
use crate::embeddings::EmbeddingClient;
use crate::errors::Result;
use crate::llm::LlmClient;
use crate::models::Credentials;
use crate::models::SearchMatch;
use crate::rag::build_grounded_prompt;
use crate::rag::ContextAssembler;
use crate::search::SearchClient;

/// Complete RAG service
///
/// Executes one strictly sequential pass per question: each step feeds the
/// next, and a failed step aborts the remainder of the pass.
pub struct RagService {
    embedder: EmbeddingClient,
    searcher: SearchClient,
    context_assembler: ContextAssembler,
    llm: LlmClient,
}

impl RagService {
    /// Create a new RAG service from configuration and session credentials
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(config: &AppConfig, credentials: &Credentials) -> Result<Self> {
        let embedder = EmbeddingClient::new(
            config.embedding_model().to_string(),
            config.embedding_endpoint().to_string(),
            credentials.google_api_key(),
        )?;
        let searcher = SearchClient::new(
            config.search_endpoint().to_string(),
            config.search_index().to_string(),
            credentials.pinecone_api_key(),
            config.top_k(),
        )?;
        let llm = LlmClient::new(
            config.llm_model().to_string(),
            config.llm_endpoint().to_string(),
            credentials.google_api_key(),
        )?;

        Ok(Self {
            embedder,
            searcher,
            context_assembler: ContextAssembler::default(),
            llm,
        })
    }

    /// Create from existing clients
    #[must_use]
    pub fn from_clients(embedder: EmbeddingClient, searcher: SearchClient, llm: LlmClient) -> Self {
        Self {
            embedder,
            searcher,
            context_assembler: ContextAssembler::default(),
            llm,
        }
    }

    /// Answer a question grounded on the indexed corpus
    ///
    /// # Errors
    /// - Embedding errors (API failures while encoding the question)
    /// - Search errors (credential, index lookup, or query failures)
    /// - Generation errors (API failures, quota exhaustion, malformed responses)
    pub async fn query(&self, question: &str) -> Result<RagResponse> {
        info!("Processing grounded query");

        debug!("Step 1: embedding question");
        let vector = self.embedder.embed_query(question).await?;

        debug!("Step 2: querying vector index");
        let matches = self.searcher.query(&vector).await?;
        debug!("Retrieved {} matches", matches.len());

        debug!("Step 3: assembling context");
        let context = self.context_assembler.assemble(&matches);

        debug!("Step 4: generating answer");
        let prompt = build_grounded_prompt(question, &context);
        let answer = self.llm.generate(&prompt).await?;

        info!("Grounded query completed");

        Ok(RagResponse {
            answer,
            context,
            matches,
        })
    }

    /// Get context assembler reference
    #[must_use]
    pub const fn context_assembler(&self) -> &ContextAssembler {
        &self.context_assembler
    }
}

/// Result of one grounded query
#[derive(Debug, Clone)]
pub struct RagResponse {
    /// The LLM completion text
    pub answer: String,
    /// The assembled grounding context the answer was conditioned on
    pub context: String,
    /// All matches the index returned, with similarity scores
    pub matches: Vec<SearchMatch>,
}
