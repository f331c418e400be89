use std::path::PathBuf;
use thiserror::Error;

/// Result type for vector store operations
pub type Result<T> = std::result::Result<T, VectorStoreError>;

/// Errors that can occur in the vector store
#[derive(Error, Debug)]
pub enum VectorStoreError {
    /// Search on a store with no ingested vectors
    #[error("Index is empty: no vectors have been added")]
    EmptyIndex,

    /// Vector dimension does not match the dimension fixed at first ingestion
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// `add` called with differing chunk and vector counts
    #[error("Chunk/vector count mismatch: {chunks} chunks, {vectors} vectors")]
    PairCountMismatch { chunks: usize, vectors: usize },

    /// Snapshot artifact missing on load
    #[error("Snapshot not found: {0}")]
    NotFound(PathBuf),

    /// Snapshot present but inconsistent or unreadable
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
