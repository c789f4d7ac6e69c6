use voxtract::application::ports::LlmClientError;
use voxtract::infrastructure::llm::LlmClientFactory;
use voxtract::presentation::config::{BackendProvider, LlmSettings};

#[test]
fn given_disabled_provider_when_creating_client_then_returns_none() {
    let client = LlmClientFactory::create(&LlmSettings::default()).unwrap();

    assert!(client.is_none());
}

#[test]
fn given_openai_with_key_when_creating_client_then_uses_configured_model() {
    let settings = LlmSettings {
        provider: BackendProvider::OpenAi,
        api_key: Some("sk-test".to_string()),
        ..Default::default()
    };

    let client = LlmClientFactory::create(&settings).unwrap().unwrap();

    assert_eq!(client.model(), "gpt-4o-mini");
}

#[test]
fn given_openai_without_key_when_creating_client_then_returns_not_configured() {
    let settings = LlmSettings {
        provider: BackendProvider::OpenAi,
        ..Default::default()
    };

    let result = LlmClientFactory::create(&settings);

    assert!(matches!(result, Err(LlmClientError::NotConfigured(_))));
}

#[test]
fn given_compatible_without_base_url_when_creating_client_then_returns_not_configured() {
    let settings = LlmSettings {
        provider: BackendProvider::Compatible,
        ..Default::default()
    };

    let result = LlmClientFactory::create(&settings);

    assert!(matches!(result, Err(LlmClientError::NotConfigured(_))));
}
