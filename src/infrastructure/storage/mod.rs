mod object_audio_store;
mod store_factory;

pub use object_audio_store::ObjectAudioStore;
pub use store_factory::AudioStoreFactory;
