use crate::error::{Result, VectorStoreError};
use crate::flat_index::FlatIndex;
use crate::types::{Embedding, SearchHit};

/// An append-only store of (chunk, embedding) pairs with exact
/// nearest-neighbor search.
///
/// The index and the chunk list live under one owner and are only ever
/// mutated together: `add` validates everything up front and then commits
/// both appends, so `count(vectors) == count(chunks)` holds after every
/// call, successful or not. The vector dimension is fixed by the first
/// non-empty `add` for the life of the store (until a `load` replaces it).
#[derive(Debug, Clone, Default)]
pub struct VectorStore {
    pub(crate) index: Option<FlatIndex>,
    pub(crate) documents: Vec<String>,
}

impl VectorStore {
    /// Create an empty store with no fixed dimension
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append chunks and their embeddings, in order.
    ///
    /// Fails with `PairCountMismatch` if the lengths differ and with
    /// `DimensionMismatch` if any vector disagrees with the store's
    /// dimension (fixed here on first use). On any error the store is left
    /// exactly as it was.
    pub fn add(&mut self, chunks: Vec<String>, vectors: Vec<Embedding>) -> Result<()> {
        if chunks.len() != vectors.len() {
            return Err(VectorStoreError::PairCountMismatch {
                chunks: chunks.len(),
                vectors: vectors.len(),
            });
        }
        if chunks.is_empty() {
            return Ok(());
        }

        let expected = match &self.index {
            Some(index) => index.dimension(),
            None => vectors[0].len(),
        };
        // Validate before mutating anything.
        for vector in &vectors {
            if vector.len() != expected {
                return Err(VectorStoreError::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                });
            }
        }

        let index = self.index.get_or_insert_with(|| FlatIndex::new(expected));
        for vector in vectors {
            index.push(vector)?;
        }
        self.documents.extend(chunks);

        log::info!("Added chunks to store. Total: {}", self.documents.len());
        Ok(())
    }

    /// Search for the k chunks closest to `query`.
    ///
    /// Fails with `EmptyIndex` if nothing has been ingested and with
    /// `DimensionMismatch` if the query dimension differs from the store's.
    /// Returns min(k, len) hits ascending by squared Euclidean distance,
    /// ties broken by insertion order.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        let index = self.index.as_ref().ok_or(VectorStoreError::EmptyIndex)?;

        let neighbors = index.search(query, k)?;
        let hits = neighbors
            .into_iter()
            .map(|(idx, distance)| SearchHit {
                text: self.documents[idx].clone(),
                distance,
            })
            .collect::<Vec<_>>();

        log::debug!("Search returned {} hits (k={k})", hits.len());
        Ok(hits)
    }

    /// Get the number of stored chunks
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get the vector dimension, if fixed by a previous ingestion
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.index.as_ref().map(FlatIndex::dimension)
    }

    /// Get the stored chunks in insertion order
    #[must_use]
    pub fn documents(&self) -> &[String] {
        &self.documents
    }
}
