mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    BackendProvider, DatabaseSettings, ExtractionSettings, FallbackSettings, JsonSpanStrategy,
    LlmSettings, LoggingSettings, ServerSettings, Settings, StorageProviderSetting,
    StorageSettings, TranscriptionSettings, UploadSettings,
};
