use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::StorageKey;

/// [`AudioStore`] over any `object_store` backend.
pub struct ObjectAudioStore {
    inner: Arc<dyn ObjectStore>,
    // LocalFileSystem rejects object attributes.
    attach_content_type: bool,
}

impl ObjectAudioStore {
    pub fn local(base_path: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            attach_content_type: false,
        })
    }

    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemory::new()), true)
    }

    pub fn with_store(inner: Arc<dyn ObjectStore>, attach_content_type: bool) -> Self {
        Self {
            inner,
            attach_content_type,
        }
    }
}

#[async_trait::async_trait]
impl AudioStore for ObjectAudioStore {
    async fn put(
        &self,
        key: &StorageKey,
        data: Bytes,
        content_type: &str,
    ) -> Result<u64, AudioStoreError> {
        let size = data.len() as u64;

        let mut attributes = Attributes::new();
        if self.attach_content_type {
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
        }
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        self.inner
            .put_opts(&StorePath::from(key.as_str()), PutPayload::from(data), options)
            .await
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;

        Ok(size)
    }
}
