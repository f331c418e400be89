use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the question-answering pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaConfig {
    /// Target chunk size in characters
    pub chunk_size: usize,

    /// Number of chunks retrieved per question
    pub top_k: usize,

    /// Ollama backend settings
    #[serde(default)]
    pub ollama: OllamaConfig,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            top_k: 5,
            ollama: OllamaConfig::default(),
        }
    }
}

impl QaConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|err| anyhow::anyhow!("failed to read config {path:?}: {err}"))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|err| anyhow::anyhow!("failed to parse config {path:?}: {err}"))?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(PipelineError::InvalidConfig(
                "chunk_size must be > 0".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(PipelineError::InvalidConfig(
                "top_k must be > 0".to_string(),
            ));
        }
        if self.ollama.base_url.is_empty() {
            return Err(PipelineError::InvalidConfig(
                "ollama.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Connection settings for the Ollama language model backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server
    pub base_url: String,

    /// Model name passed to /api/generate
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama2".to_string(),
        }
    }
}
