use std::path::PathBuf;
use std::sync::Arc;

use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::AudioFileName;

/// Synthesized audio kept as flat files under one output directory.
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalAudioStore {
    pub fn new(output_dir: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&output_dir)?;
        let fs = LocalFileSystem::new_with_prefix(output_dir)
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl AudioStore for LocalAudioStore {
    async fn store(&self, name: &AudioFileName, data: Vec<u8>) -> Result<u64, AudioStoreError> {
        let size = data.len() as u64;
        self.inner
            .put(&StorePath::from(name.as_str()), PutPayload::from(data))
            .await
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(size)
    }

    async fn fetch(&self, name: &AudioFileName) -> Result<Vec<u8>, AudioStoreError> {
        let result = self
            .inner
            .get(&StorePath::from(name.as_str()))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => {
                    AudioStoreError::NotFound(name.to_string())
                }
                other => AudioStoreError::ReadFailed(other.to_string()),
            })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| AudioStoreError::ReadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
