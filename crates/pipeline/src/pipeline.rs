use crate::collaborators::{Embedder, LanguageModel, TextExtractor};
use crate::config::QaConfig;
use crate::error::{PipelineError, Result};
use crate::{prompt, retriever};
use docqa_text_chunker::{ChunkerConfig, TextChunker};
use docqa_vector_store::VectorStore;
use std::path::Path;

/// Orchestrates the ingest and query paths over one owned vector store.
///
/// All collaborators are injected at construction. The two paths share no
/// mutable state beyond the store, and every call is blocking with no
/// internal retry: the first collaborator failure surfaces to the caller.
pub struct RagPipeline {
    chunker: TextChunker,
    extractor: Box<dyn TextExtractor>,
    embedder: Box<dyn Embedder>,
    llm: Box<dyn LanguageModel>,
    store: VectorStore,
    top_k: usize,
}

impl RagPipeline {
    /// Create a pipeline from configuration and injected collaborators
    pub fn new(
        config: &QaConfig,
        extractor: Box<dyn TextExtractor>,
        embedder: Box<dyn Embedder>,
        llm: Box<dyn LanguageModel>,
    ) -> Result<Self> {
        config.validate()?;
        let chunker = TextChunker::new(ChunkerConfig {
            chunk_size: config.chunk_size,
        })?;

        Ok(Self {
            chunker,
            extractor,
            embedder,
            llm,
            store: VectorStore::new(),
            top_k: config.top_k,
        })
    }

    /// Ingest one document: extract, chunk, embed, add to the store.
    ///
    /// Returns the number of chunks ingested. A document with no
    /// extractable text yields 0 and leaves the store unchanged. Chunks and
    /// vectors always commit together; the first failure anywhere aborts
    /// the call with nothing added.
    pub fn ingest_document(&mut self, path: &Path) -> Result<usize> {
        log::info!("Ingesting document {path:?}");

        let text = self
            .extractor
            .extract_text(path)
            .map_err(PipelineError::Extraction)?;

        let chunks = self.chunker.chunk(&text);
        if chunks.is_empty() {
            log::warn!("No extractable text in {path:?}; nothing ingested");
            return Ok(0);
        }

        let vectors = self
            .embedder
            .embed_batch(&chunks)
            .map_err(PipelineError::Embedding)?;

        let count = chunks.len();
        self.store.add(chunks, vectors)?;

        log::info!("Ingested {count} chunks from {path:?}");
        Ok(count)
    }

    /// Answer a question against the ingested documents.
    ///
    /// Retrieves the configured top-k chunks, composes the prompt, and
    /// returns the language model's output as-is: no post-processing, no
    /// citation tracking.
    pub fn answer(&self, question: &str) -> Result<String> {
        self.answer_with_k(question, self.top_k)
    }

    /// Answer a question retrieving `k` chunks instead of the configured
    /// default.
    pub fn answer_with_k(&self, question: &str, k: usize) -> Result<String> {
        log::info!("Answering question ({} bytes, k={k})", question.len());

        let hits = retriever::retrieve(question, self.embedder.as_ref(), &self.store, k)?;
        let prompt = prompt::compose(question, &hits);

        self.llm
            .complete(&prompt)
            .map_err(PipelineError::Completion)
    }

    /// Persist the store snapshot to `dir`
    pub fn save_store(&self, dir: impl AsRef<Path>) -> Result<()> {
        Ok(self.store.save(dir)?)
    }

    /// Replace the store with the snapshot at `dir`
    pub fn load_store(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        Ok(self.store.load(dir)?)
    }

    /// Get the owned vector store
    #[must_use]
    pub fn store(&self) -> &VectorStore {
        &self.store
    }
}
