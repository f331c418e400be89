use crate::config::ChunkerConfig;
use crate::error::Result;

/// Splits document text into bounded, non-overlapping chunks on word
/// boundaries.
#[derive(Debug, Clone)]
pub struct TextChunker {
    config: ChunkerConfig,
}

impl TextChunker {
    /// Create a chunker with the given configuration
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configured chunk size in characters
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    /// Split `text` into space-joined word chunks.
    ///
    /// Words are accumulated greedily; once the space-joined accumulator
    /// reaches `chunk_size` characters it is emitted and a new one starts.
    /// A trailing partial accumulator is emitted as a final short chunk.
    /// Empty input yields no chunks; a single word longer than `chunk_size`
    /// is emitted on its own, unsplit.
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        // Space-joined char length of `current`, tracked incrementally.
        let mut current_len = 0usize;

        for word in text.split_whitespace() {
            if !current.is_empty() {
                current_len += 1;
            }
            current_len += word.chars().count();
            current.push(word);

            if current_len >= self.config.chunk_size {
                chunks.push(current.join(" "));
                current.clear();
                current_len = 0;
            }
        }

        if !current.is_empty() {
            chunks.push(current.join(" "));
        }

        log::debug!(
            "Chunked {} bytes into {} chunks (chunk_size={})",
            text.len(),
            chunks.len(),
            self.config.chunk_size
        );
        chunks
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self {
            config: ChunkerConfig::default(),
        }
    }
}
