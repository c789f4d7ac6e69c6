use voxtract::presentation::config::{
    BackendProvider, JsonSpanStrategy, StorageProviderSetting, UploadSettings,
};
use voxtract::presentation::{Environment, Settings};

#[test]
fn given_no_configuration_when_using_defaults_then_backends_are_disabled() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.transcription.provider, BackendProvider::Disabled);
    assert_eq!(settings.transcription.model, "whisper-1");
    assert_eq!(settings.llm.provider, BackendProvider::Disabled);
    assert_eq!(settings.llm.max_output_tokens, 900);
    assert_eq!(settings.llm.temperature, 0.2);
    assert_eq!(settings.storage.provider, StorageProviderSetting::Local);
    assert!(settings.database.url.is_none());
    assert_eq!(settings.upload.max_file_size_mb, 25);
    assert_eq!(settings.fallback.transcription_delay_ms, 500);
    assert_eq!(settings.fallback.extraction_delay_ms, 500);
    assert_eq!(settings.extraction.json_span, JsonSpanStrategy::Greedy);
    assert!(!settings.logging.json);
}

#[test]
fn given_missing_settings_file_when_loading_then_falls_back_to_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.upload.max_file_size_mb, 25);
}

#[test]
fn given_upload_limit_when_computing_sizes_then_body_limit_leaves_room_for_multipart() {
    let upload = UploadSettings { max_file_size_mb: 25 };

    assert_eq!(upload.max_file_size_bytes(), 25 * 1024 * 1024);
    assert!(upload.body_limit_bytes() > upload.max_file_size_bytes());
}

#[test]
fn given_environment_names_when_parsing_then_matches_case_insensitively() {
    assert_eq!(Environment::try_from("PROD".to_string()), Ok(Environment::Prod));
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert!(Environment::try_from("staging".to_string()).is_err());
    assert_eq!(Environment::Test.settings_file(), "appsettings.test");
}
