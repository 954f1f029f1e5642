//! Embedding API client for the Google Generative Language service

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::errors::PolicyRagError;
use crate::errors::Result;

/// Client for generating query embeddings
pub struct EmbeddingClient {
    model: String,
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl EmbeddingClient {
    /// Create a new embedding client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(model: String, endpoint: String, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| PolicyRagError::Http(e.to_string()))?;

        Ok(Self {
            model,
            endpoint,
            api_key,
            client,
        })
    }

    /// Generate a query-intent embedding for a single text
    ///
    /// # Errors
    /// - API request failures (network errors, timeouts, authentication failures)
    /// - Invalid API responses (malformed JSON, empty embedding)
    pub async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            PolicyRagError::MissingCredential("embedding API key not provided".to_string())
        })?;

        #[derive(Serialize)]
        struct Part<'a> {
            text: &'a str,
        }

        #[derive(Serialize)]
        struct Content<'a> {
            parts: Vec<Part<'a>>,
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct EmbedRequest<'a> {
            model: String,
            content: Content<'a>,
            task_type: &'a str,
        }

        #[derive(Deserialize)]
        struct EmbedResponse {
            embedding: EmbeddingValues,
        }

        #[derive(Deserialize)]
        struct EmbeddingValues {
            values: Vec<f32>,
        }

        let url = format!("{}/v1beta/models/{}:embedContent", self.endpoint, self.model);
        debug!("Calling embedding API: {}", url);

        let request = EmbedRequest {
            model: format!("models/{}", self.model),
            content: Content {
                parts: vec![Part { text }],
            },
            // Query intent; the corpus was indexed with document intent
            task_type: "RETRIEVAL_QUERY",
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| PolicyRagError::Embedding(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PolicyRagError::Embedding(format!(
                "embedding API error ({status}): {error_text}"
            )));
        }

        let result: EmbedResponse = response
            .json()
            .await
            .map_err(|e| PolicyRagError::Embedding(format!("Failed to parse response: {e}")))?;

        if result.embedding.values.is_empty() {
            return Err(PolicyRagError::Embedding(
                "No embedding in response".to_string(),
            ));
        }

        Ok(result.embedding.values)
    }
}
