//! External collaborator interfaces.
//!
//! The pipeline treats text extraction, embedding, and completion as black
//! boxes behind these traits. Implementations own their retry/timeout
//! policy; the pipeline calls them once, blocking, and surfaces the first
//! failure.

use std::path::Path;

/// Extracts plain text from a document on disk.
///
/// An empty string means the document has no extractable text; whether to
/// fall back to OCR is the implementation's decision, not the pipeline's.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> anyhow::Result<String>;
}

/// Produces fixed-dimension embedding vectors for text.
pub trait Embedder {
    fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>>;

    /// Embed a batch of texts, one vector per input, order preserved.
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        texts.iter().map(|text| self.embed(text)).collect()
    }
}

/// Completes a prompt with a language model.
pub trait LanguageModel {
    fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}
