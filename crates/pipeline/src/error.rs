use docqa_text_chunker::ChunkerError;
use docqa_vector_store::VectorStoreError;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors surfaced by the ingest and query paths.
///
/// Collaborator failures keep their source error; store errors pass through
/// unchanged so callers can still match on `EmptyIndex` and
/// `DimensionMismatch`.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Text extraction collaborator failed
    #[error("Extraction failed: {0}")]
    Extraction(#[source] anyhow::Error),

    /// Embedding collaborator failed
    #[error("Embedding failed: {0}")]
    Embedding(#[source] anyhow::Error),

    /// Language model collaborator failed
    #[error("Completion failed: {0}")]
    Completion(#[source] anyhow::Error),

    /// Vector store error (EmptyIndex, DimensionMismatch, snapshot errors)
    #[error("Vector store error: {0}")]
    Store(#[from] VectorStoreError),

    /// Chunker rejected its configuration
    #[error(transparent)]
    Chunker(#[from] ChunkerError),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
