use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

const BYTES_PER_MB: usize = 1024 * 1024;
/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = BYTES_PER_MB;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub llm: LlmSettings,
    pub storage: StorageSettings,
    pub database: DatabaseSettings,
    pub upload: UploadSettings,
    pub fallback: FallbackSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<environment>.*` (optional) under `APP__*`
    /// environment variables, e.g. `APP__LLM__API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Which kind of inference backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    #[serde(rename = "openai")]
    OpenAi,
    /// Any server exposing the OpenAI wire format at `base_url`.
    Compatible,
    /// Backend treated as unavailable; the stage falls back.
    #[default]
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub provider: BackendProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            provider: BackendProvider::default(),
            api_key: None,
            base_url: None,
            model: "whisper-1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: BackendProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: BackendProvider::default(),
            api_key: None,
            base_url: None,
            model: "gpt-4o-mini".to_string(),
            max_output_tokens: 900,
            temperature: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    #[default]
    Local,
    Memory,
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: StorageProviderSetting::default(),
            local_path: "./data/audio".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Without a URL the service runs without persistence.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb.saturating_mul(BYTES_PER_MB)
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.max_file_size_bytes()
            .saturating_add(MULTIPART_OVERHEAD_BYTES)
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: 25,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct FallbackSettings {
    pub transcription_delay_ms: u64,
    pub extraction_delay_ms: u64,
}

impl FallbackSettings {
    pub fn transcription_delay(&self) -> Duration {
        Duration::from_millis(self.transcription_delay_ms)
    }

    pub fn extraction_delay(&self) -> Duration {
        Duration::from_millis(self.extraction_delay_ms)
    }
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            transcription_delay_ms: 500,
            extraction_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonSpanStrategy {
    #[default]
    Greedy,
    Balanced,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub json_span: JsonSpanStrategy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
