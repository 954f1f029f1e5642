use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    pub endpoint: String,
    #[serde(default = "default_embedding_model")]
    pub model: String,
}

fn default_embedding_model() -> String {
    "text-embedding-004".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub endpoint: String,
    pub index: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    crate::search::DEFAULT_TOP_K
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub endpoint: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub embedding: EmbeddingConfig,
    pub search: SearchConfig,
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(crate::PolicyRagError::Io)?;

        let config: AppConfig =
            toml::from_str(&content).map_err(crate::PolicyRagError::TomlParsing)?;

        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            Self::from_file("config.example.toml")
        } else {
            Ok(Self::default())
        }
    }

    /// Get embedding API endpoint
    pub fn embedding_endpoint(&self) -> &str {
        &self.embedding.endpoint
    }

    /// Get embedding model name
    pub fn embedding_model(&self) -> &str {
        &self.embedding.model
    }

    /// Get vector search control-plane endpoint
    pub fn search_endpoint(&self) -> &str {
        &self.search.endpoint
    }

    /// Get vector index name
    pub fn search_index(&self) -> &str {
        &self.search.index
    }

    /// Get nearest-neighbor count per query
    pub fn top_k(&self) -> usize {
        self.search.top_k
    }

    /// Get LLM API endpoint
    pub fn llm_endpoint(&self) -> &str {
        &self.llm.endpoint
    }

    /// Get LLM model identifier
    pub fn llm_model(&self) -> &str {
        &self.llm.model
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                backtrace: false,
            },
            embedding: EmbeddingConfig {
                endpoint: "https://generativelanguage.googleapis.com".to_string(),
                model: default_embedding_model(),
            },
            search: SearchConfig {
                endpoint: "https://api.pinecone.io".to_string(),
                index: "demo-rag-it1994".to_string(),
                top_k: default_top_k(),
            },
            llm: LlmConfig {
                endpoint: "https://generativelanguage.googleapis.com".to_string(),
                model: default_llm_model(),
            },
        }
    }
}
