use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::object_audio_store::ObjectAudioStore;

pub struct AudioStoreFactory;

impl AudioStoreFactory {
    /// `Ok(None)` when audio bytes should not be kept.
    pub fn create(settings: &StorageSettings) -> Result<Option<Arc<dyn AudioStore>>, AudioStoreError> {
        match settings.provider {
            StorageProviderSetting::Disabled => Ok(None),
            StorageProviderSetting::Memory => Ok(Some(Arc::new(ObjectAudioStore::in_memory()))),
            StorageProviderSetting::Local => {
                let store = ObjectAudioStore::local(PathBuf::from(&settings.local_path))?;
                Ok(Some(Arc::new(store)))
            }
        }
    }
}
