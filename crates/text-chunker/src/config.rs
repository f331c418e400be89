use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for text chunking behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Target chunk size in characters (soft limit; a chunk may exceed it
    /// by the length of its last added word)
    pub chunk_size: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self { chunk_size: 1000 }
    }
}

impl ChunkerConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChunkerError::invalid_config("chunk_size must be > 0"));
        }
        Ok(())
    }
}
