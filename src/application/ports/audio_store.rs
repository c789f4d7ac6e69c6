use std::io;

use bytes::Bytes;

use crate::domain::StorageKey;

#[async_trait::async_trait]
pub trait AudioStore: Send + Sync {
    /// Stores the recording and returns the number of bytes written.
    async fn put(
        &self,
        key: &StorageKey,
        data: Bytes,
        content_type: &str,
    ) -> Result<u64, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("store not configured: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
