//! # Docqa Vector Store
//!
//! Exact vector storage and similarity search over document chunks.
//!
//! ## Architecture
//!
//! ```text
//! Chunk[] + Embedding[]
//!     │
//!     ├──> FlatIndex
//!     │      └─> Exact brute-force L2 search
//!     │
//!     └──> Parallel chunk list (insertion order)
//!            └─> Snapshot (index.json + documents.json)
//! ```
//!
//! The store bundles the search index and the ordered chunk list under one
//! owner so that `add` either commits both or commits neither, and so that
//! indices coming out of a search always name positions in the current
//! chunk list.
//!
//! ## Example
//!
//! ```rust
//! use docqa_vector_store::VectorStore;
//!
//! # fn main() -> docqa_vector_store::Result<()> {
//! let mut store = VectorStore::new();
//! store.add(
//!     vec!["alpha".into(), "beta".into()],
//!     vec![vec![0.0, 0.0], vec![1.0, 1.0]],
//! )?;
//!
//! let hits = store.search(&[0.1, 0.1], 1)?;
//! assert_eq!(hits[0].text, "alpha");
//! # Ok(())
//! # }
//! ```

mod error;
mod flat_index;
mod snapshot;
mod store;
mod types;

pub use error::{Result, VectorStoreError};
pub use flat_index::FlatIndex;
pub use snapshot::{DOCUMENTS_FILE_NAME, INDEX_FILE_NAME, SNAPSHOT_SCHEMA_VERSION};
pub use store::VectorStore;
pub use types::{Embedding, SearchHit};
