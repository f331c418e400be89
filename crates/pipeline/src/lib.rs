//! # Docqa Pipeline
//!
//! Retrieval-augmented question answering over ingested documents.
//!
//! ## Architecture
//!
//! ```text
//! Ingest path:
//!   document path
//!       │
//!       ├──> TextExtractor (PDF text / OCR, black box)
//!       ├──> TextChunker
//!       ├──> Embedder::embed_batch (one vector per chunk, in order)
//!       └──> VectorStore::add (both lists commit together)
//!
//! Query path:
//!   question
//!       │
//!       ├──> Embedder::embed ──> VectorStore::search (top-k)
//!       ├──> prompt::compose (context + question template)
//!       └──> LanguageModel::complete ──> answer, returned as-is
//! ```
//!
//! Collaborators (extraction, embedding, completion) are injected trait
//! objects so tests can substitute fakes; the pipeline never retries them
//! and surfaces their first failure to the caller. Everything is
//! synchronous and blocking.
//!
//! ## Example
//!
//! ```no_run
//! use docqa_pipeline::{OllamaClient, QaConfig, RagPipeline};
//! # use std::path::Path;
//! # use docqa_pipeline::{Embedder, TextExtractor};
//! # struct MyExtractor;
//! # impl TextExtractor for MyExtractor {
//! #     fn extract_text(&self, _: &Path) -> anyhow::Result<String> { Ok(String::new()) }
//! # }
//! # struct MyEmbedder;
//! # impl Embedder for MyEmbedder {
//! #     fn embed(&self, _: &str) -> anyhow::Result<Vec<f32>> { Ok(vec![0.0]) }
//! # }
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = QaConfig::default();
//!     let llm = OllamaClient::new(&config.ollama)?;
//!     let mut pipeline = RagPipeline::new(
//!         &config,
//!         Box::new(MyExtractor),
//!         Box::new(MyEmbedder),
//!         Box::new(llm),
//!     )?;
//!
//!     pipeline.ingest_document(Path::new("paper.pdf"))?;
//!     let answer = pipeline.answer("What is the main finding?")?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

mod collaborators;
mod config;
mod error;
mod ollama;
mod pipeline;
pub mod prompt;
mod retriever;

pub use collaborators::{Embedder, LanguageModel, TextExtractor};
pub use config::{OllamaConfig, QaConfig};
pub use error::{PipelineError, Result};
pub use ollama::OllamaClient;
pub use pipeline::RagPipeline;
pub use retriever::retrieve;

// Re-export store types for convenience
pub use docqa_vector_store::{SearchHit, VectorStore, VectorStoreError};
