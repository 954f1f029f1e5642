//! Core data types shared across the pipeline and the chat session

use serde::Deserialize;
use serde::Serialize;

/// Author of a transcript turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry in the session transcript
///
/// Turns are immutable once created: they are appended in arrival order and
/// never rewritten or removed for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Stored metadata attached to an indexed fragment
///
/// `text_content` is the fragment body used for context assembly; any other
/// keys the index stores alongside it are preserved untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub text_content: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A nearest-neighbor match returned by the vector index
///
/// `score` is a similarity in `[0, 1]`, larger meaning closer. Matches are
/// consumed immediately by the context assembler and not retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    #[serde(default)]
    pub id: String,
    pub score: f32,
    pub metadata: MatchMetadata,
}

/// Per-session secrets for the two external services
///
/// Held in memory only, never persisted. Either key may be absent until the
/// user supplies it; the session orchestrator refuses to start a pipeline
/// while one is missing.
#[derive(Clone, Default)]
pub struct Credentials {
    google_api_key: String,
    pinecone_api_key: String,
}

impl Credentials {
    pub fn new(google_api_key: impl Into<String>, pinecone_api_key: impl Into<String>) -> Self {
        Self {
            google_api_key: google_api_key.into(),
            pinecone_api_key: pinecone_api_key.into(),
        }
    }

    /// Both secrets are present
    pub fn is_complete(&self) -> bool {
        self.google_api_key().is_some() && self.pinecone_api_key().is_some()
    }

    /// Google API key, if non-empty
    pub fn google_api_key(&self) -> Option<String> {
        non_empty(&self.google_api_key)
    }

    /// Vector index API key, if non-empty
    pub fn pinecone_api_key(&self) -> Option<String> {
        non_empty(&self.pinecone_api_key)
    }
}

impl std::fmt::Debug for Credentials {
    // Secrets stay out of logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("google_api_key", &self.google_api_key().map(|_| "<set>"))
            .field("pinecone_api_key", &self.pinecone_api_key().map(|_| "<set>"))
            .finish()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
