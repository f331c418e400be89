use crate::error::{Result, VectorStoreError};
use crate::types::Embedding;

/// Exact brute-force vector index over squared Euclidean distance.
///
/// Vectors are kept in insertion order; positions returned by `search` are
/// insertion indices. Exactness is the point here: corpora are small enough
/// that O(n) scans beat any approximation structure on simplicity and are
/// bit-for-bit reproducible across save/load.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimension: usize,
    vectors: Vec<Embedding>,
}

impl FlatIndex {
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: Vec::new(),
        }
    }

    /// Append a vector to the index
    pub fn push(&mut self, vector: Embedding) -> Result<()> {
        if vector.len() != self.dimension {
            return Err(VectorStoreError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        self.vectors.push(vector);
        Ok(())
    }

    /// Search for the k nearest vectors to `query`.
    ///
    /// Returns (insertion index, squared L2 distance) pairs ascending by
    /// distance. Ties keep insertion order (stable sort).
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if query.len() != self.dimension {
            return Err(VectorStoreError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let mut hits: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(idx, vector)| (idx, squared_l2(query, vector)))
            .collect();

        hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(k);

        Ok(hits)
    }

    /// Get number of vectors in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Get the fixed vector dimension
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get the stored vectors in insertion order
    #[must_use]
    pub fn vectors(&self) -> &[Embedding] {
        &self.vectors
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
