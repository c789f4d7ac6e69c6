use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::StorageKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioFileId(Uuid);

impl AudioFileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AudioFileId {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata of an accepted upload. Signal properties (duration, sample
/// rate, channels) are never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioFile {
    pub id: AudioFileId,
    pub file_name: String,
    pub file_size_bytes: u64,
    pub mime_type: String,
    pub storage_key: Option<StorageKey>,
    pub created_at: DateTime<Utc>,
}

impl AudioFile {
    pub fn new(
        id: AudioFileId,
        file_name: String,
        mime_type: String,
        file_size_bytes: u64,
        storage_key: Option<StorageKey>,
    ) -> Self {
        Self {
            id,
            file_name,
            file_size_bytes,
            mime_type,
            storage_key,
            created_at: Utc::now(),
        }
    }
}

pub fn is_audio_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("audio/")
}
