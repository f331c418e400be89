//! # Docqa Text Chunker
//!
//! Word-boundary text chunking for embedding and retrieval granularity.
//!
//! ## Philosophy
//!
//! Retrieval quality for document QA depends less on clever segmentation
//! than on chunks being bounded and stable. The chunker therefore does one
//! deliberately simple thing: it splits extracted document text on
//! whitespace and greedily packs words into chunks of roughly
//! `chunk_size` characters, with no overlap and no token awareness.
//!
//! ## Example
//!
//! ```rust
//! use docqa_text_chunker::{ChunkerConfig, TextChunker};
//!
//! let chunker = TextChunker::new(ChunkerConfig { chunk_size: 40 }).unwrap();
//! let chunks = chunker.chunk("the quick brown fox jumps over the lazy dog");
//! assert!(!chunks.is_empty());
//! ```

mod chunker;
mod config;
mod error;

pub use chunker::TextChunker;
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
