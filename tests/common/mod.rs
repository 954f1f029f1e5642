//! Shared fixtures for integration tests

use policyrag::config::AppConfig;
use policyrag::config::EmbeddingConfig;
use policyrag::config::LlmConfig;
use policyrag::config::LoggingConfig;
use policyrag::config::SearchConfig;
use policyrag::models::Credentials;
use serde_json::json;
use serde_json::Value;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

pub const TEST_INDEX: &str = "policies-test";

pub const EMBED_PATH: &str = "/v1beta/models/text-embedding-004:embedContent";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
pub const QUERY_PATH: &str = "/query";

/// Config with every external endpoint pointed at the mock server
pub fn test_config(server: &MockServer) -> AppConfig {
    AppConfig {
        logging: LoggingConfig {
            level: "info".to_string(),
            backtrace: false,
        },
        embedding: EmbeddingConfig {
            endpoint: server.uri(),
            model: "text-embedding-004".to_string(),
        },
        search: SearchConfig {
            endpoint: server.uri(),
            index: TEST_INDEX.to_string(),
            top_k: 3,
        },
        llm: LlmConfig {
            endpoint: server.uri(),
            model: "gemini-2.5-flash".to_string(),
        },
    }
}

pub fn test_credentials() -> Credentials {
    Credentials::new("google-test-key", "pinecone-test-key")
}

/// Mount a successful embedding response
pub async fn mount_embedding(server: &MockServer, values: &[f32]) {
    Mock::given(method("POST"))
        .and(path(EMBED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embedding": { "values": values }
        })))
        .mount(server)
        .await;
}

/// Mount the control-plane index lookup, pointing the data plane back at
/// the same mock server
pub async fn mount_index_lookup(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/indexes/{TEST_INDEX}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": TEST_INDEX,
            "host": server.uri()
        })))
        .mount(server)
        .await;
}

/// Mount a successful vector query response with the given matches
pub async fn mount_query(server: &MockServer, matches: Value) {
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": matches,
            "namespace": ""
        })))
        .mount(server)
        .await;
}

/// Mount a successful completion response
pub async fn mount_generation(server: &MockServer, answer: &str) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "parts": [ { "text": answer } ] } }
            ]
        })))
        .mount(server)
        .await;
}

/// Extract the prompt text sent to the generation endpoint
#[allow(dead_code)]
pub async fn sent_prompt(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await?;
    let request = requests
        .iter()
        .find(|r| r.url.path() == GENERATE_PATH)?;
    let body: Value = serde_json::from_slice(&request.body).ok()?;
    body["contents"][0]["parts"][0]["text"]
        .as_str()
        .map(ToString::to_string)
}

/// Paths of every request the mock server saw, in arrival order
pub async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}
