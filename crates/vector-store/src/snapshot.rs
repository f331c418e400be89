use crate::error::{Result, VectorStoreError};
use crate::flat_index::FlatIndex;
use crate::store::VectorStore;
use crate::types::Embedding;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Serialized search structure
pub const INDEX_FILE_NAME: &str = "index.json";
/// Serialized ordered chunk list
pub const DOCUMENTS_FILE_NAME: &str = "documents.json";

#[derive(Debug, Serialize, Deserialize)]
struct PersistedIndex {
    schema_version: u32,
    dimension: usize,
    vectors: Vec<Embedding>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedDocuments {
    schema_version: u32,
    documents: Vec<String>,
}

impl VectorStore {
    /// Persist the store into `dir` as `index.json` + `documents.json`.
    ///
    /// Both artifacts are written to `.tmp` siblings first and renamed into
    /// place, so a failure partway never corrupts an existing snapshot.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        log::info!("Saving vector store snapshot to {dir:?}");
        std::fs::create_dir_all(dir)?;

        let persisted_index = PersistedIndex {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            dimension: self.index.as_ref().map_or(0, FlatIndex::dimension),
            vectors: self
                .index
                .as_ref()
                .map_or_else(Vec::new, |index| index.vectors().to_vec()),
        };
        let persisted_documents = PersistedDocuments {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            documents: self.documents.clone(),
        };

        let index_path = dir.join(INDEX_FILE_NAME);
        let documents_path = dir.join(DOCUMENTS_FILE_NAME);
        let index_tmp = index_path.with_extension("json.tmp");
        let documents_tmp = documents_path.with_extension("json.tmp");

        std::fs::write(&index_tmp, serde_json::to_vec_pretty(&persisted_index)?)?;
        std::fs::write(
            &documents_tmp,
            serde_json::to_vec_pretty(&persisted_documents)?,
        )?;

        // Both temporaries are on disk; move them into place.
        std::fs::rename(&index_tmp, &index_path)?;
        std::fs::rename(&documents_tmp, &documents_path)?;

        log::info!("Snapshot saved ({} chunks)", self.documents.len());
        Ok(())
    }

    /// Replace this store's state with the snapshot at `dir`.
    ///
    /// Fails with `NotFound` if either artifact is absent and with
    /// `CorruptSnapshot` if the artifacts are malformed or disagree with
    /// each other. On failure the previous in-memory state is untouched;
    /// on success index positions match the loaded chunk list exactly.
    pub fn load(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        log::info!("Loading vector store snapshot from {dir:?}");

        let index_path = dir.join(INDEX_FILE_NAME);
        let documents_path = dir.join(DOCUMENTS_FILE_NAME);
        if !index_path.exists() {
            return Err(VectorStoreError::NotFound(index_path));
        }
        if !documents_path.exists() {
            return Err(VectorStoreError::NotFound(documents_path));
        }

        let persisted_index: PersistedIndex = parse_artifact(&index_path)?;
        let persisted_documents: PersistedDocuments = parse_artifact(&documents_path)?;

        if persisted_index.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(VectorStoreError::CorruptSnapshot(format!(
                "unsupported index schema_version {}",
                persisted_index.schema_version
            )));
        }
        if persisted_documents.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(VectorStoreError::CorruptSnapshot(format!(
                "unsupported documents schema_version {}",
                persisted_documents.schema_version
            )));
        }
        if persisted_index.vectors.len() != persisted_documents.documents.len() {
            return Err(VectorStoreError::CorruptSnapshot(format!(
                "chunk count {} does not match vector count {}",
                persisted_documents.documents.len(),
                persisted_index.vectors.len()
            )));
        }

        // Rebuild the index off to the side and swap in only on success.
        let index = if persisted_index.vectors.is_empty() {
            None
        } else {
            let mut index = FlatIndex::new(persisted_index.dimension);
            for vector in persisted_index.vectors {
                index.push(vector).map_err(|_| {
                    VectorStoreError::CorruptSnapshot(format!(
                        "stored vector disagrees with stored dimension {}",
                        persisted_index.dimension
                    ))
                })?;
            }
            Some(index)
        };

        self.index = index;
        self.documents = persisted_documents.documents;

        log::info!("Snapshot loaded ({} chunks)", self.documents.len());
        Ok(())
    }
}

fn parse_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(|err| {
        VectorStoreError::CorruptSnapshot(format!("failed to parse {path:?}: {err}"))
    })
}
