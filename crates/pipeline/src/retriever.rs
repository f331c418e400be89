use crate::collaborators::Embedder;
use crate::error::{PipelineError, Result};
use docqa_vector_store::{SearchHit, VectorStore};

/// Embed `question` and fetch its k nearest chunks from the store.
///
/// Store errors pass through unchanged: `EmptyIndex` means nothing has been
/// ingested yet and `DimensionMismatch` means the embedding model changed
/// between ingestion and query. Neither is retried here.
pub fn retrieve(
    question: &str,
    embedder: &dyn Embedder,
    store: &VectorStore,
    k: usize,
) -> Result<Vec<SearchHit>> {
    log::debug!(
        "Retrieving top-{k} chunks for question ({} bytes)",
        question.len()
    );
    let query_vector = embedder.embed(question).map_err(PipelineError::Embedding)?;
    Ok(store.search(&query_vector, k)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docqa_vector_store::VectorStoreError;

    struct FixedEmbedder(Vec<f32>);

    impl Embedder for FixedEmbedder {
        fn embed(&self, _text: &str) -> anyhow::Result<Vec<f32>> {
            Ok(self.0.clone())
        }
    }

    struct FailingEmbedder;

    impl Embedder for FailingEmbedder {
        fn embed(&self, _text: &str) -> anyhow::Result<Vec<f32>> {
            anyhow::bail!("model unavailable")
        }
    }

    #[test]
    fn retrieves_nearest_chunks() {
        let mut store = VectorStore::new();
        store
            .add(
                vec!["close".into(), "distant".into()],
                vec![vec![0.0, 0.0], vec![5.0, 5.0]],
            )
            .unwrap();

        let embedder = FixedEmbedder(vec![0.1, 0.1]);
        let hits = retrieve("anything", &embedder, &store, 1).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "close");
    }

    #[test]
    fn empty_index_propagates_unchanged() {
        let store = VectorStore::new();
        let embedder = FixedEmbedder(vec![0.0]);
        let err = retrieve("q", &embedder, &store, 5).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Store(VectorStoreError::EmptyIndex)
        ));
    }

    #[test]
    fn dimension_mismatch_propagates_unchanged() {
        let mut store = VectorStore::new();
        store.add(vec!["a".into()], vec![vec![0.0, 0.0]]).unwrap();

        let embedder = FixedEmbedder(vec![0.0, 0.0, 0.0]);
        let err = retrieve("q", &embedder, &store, 5).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Store(VectorStoreError::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn embedder_failure_is_an_embedding_error() {
        let mut store = VectorStore::new();
        store.add(vec!["a".into()], vec![vec![0.0]]).unwrap();

        let err = retrieve("q", &FailingEmbedder, &store, 5).unwrap_err();
        assert!(matches!(err, PipelineError::Embedding(_)));
    }
}
