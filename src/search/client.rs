//! Vector index API client

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::errors::PolicyRagError;
use crate::errors::Result;
use crate::models::SearchMatch;

/// Client for querying a named remote vector index
pub struct SearchClient {
    endpoint: String,
    index: String,
    api_key: Option<String>,
    top_k: usize,
    client: Client,
}

impl SearchClient {
    /// Create a new search client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(
        endpoint: String,
        index: String,
        api_key: Option<String>,
        top_k: usize,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| PolicyRagError::Http(e.to_string()))?;

        Ok(Self {
            endpoint,
            index,
            api_key,
            top_k,
            client,
        })
    }

    /// Get the index name this client queries
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Query the index for the nearest stored fragments
    ///
    /// Returns at most `top_k` matches ordered by descending similarity,
    /// each carrying its stored metadata.
    ///
    /// # Errors
    /// - Invalid credential or nonexistent index
    /// - Transport failures and malformed responses
    pub async fn query(&self, vector: &[f32]) -> Result<Vec<SearchMatch>> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            PolicyRagError::MissingCredential("search API key not provided".to_string())
        })?;

        let host = self.resolve_index_host(api_key).await?;

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct QueryRequest<'a> {
            vector: &'a [f32],
            top_k: usize,
            include_metadata: bool,
        }

        #[derive(Deserialize)]
        struct QueryResponse {
            #[serde(default)]
            matches: Vec<SearchMatch>,
        }

        let url = format!("{host}/query");
        debug!("Querying vector index '{}': {}", self.index, url);

        let request = QueryRequest {
            vector,
            top_k: self.top_k,
            include_metadata: true,
        };

        let response = self
            .client
            .post(&url)
            .header("Api-Key", api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| PolicyRagError::Search(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PolicyRagError::Search(format!(
                "vector index query error ({status}): {error_text}"
            )));
        }

        let result: QueryResponse = response
            .json()
            .await
            .map_err(|e| PolicyRagError::Search(format!("Failed to parse response: {e}")))?;

        debug!("Vector index returned {} matches", result.matches.len());

        Ok(result.matches)
    }

    /// Resolve the data-plane host of the named index via the control plane
    async fn resolve_index_host(&self, api_key: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct DescribeIndexResponse {
            host: String,
        }

        let url = format!("{}/indexes/{}", self.endpoint, self.index);
        debug!("Resolving index host: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Api-Key", api_key)
            .send()
            .await
            .map_err(|e| PolicyRagError::Search(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PolicyRagError::Search(format!(
                "index '{}' lookup error ({status}): {error_text}",
                self.index
            )));
        }

        let result: DescribeIndexResponse = response
            .json()
            .await
            .map_err(|e| PolicyRagError::Search(format!("Failed to parse response: {e}")))?;

        // The control plane returns a bare hostname
        if result.host.contains("://") {
            Ok(result.host)
        } else {
            Ok(format!("https://{}", result.host))
        }
    }
}
