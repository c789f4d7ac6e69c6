use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{BackendProvider, LlmSettings};

use super::openai_chat_client::OpenAiChatClient;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub struct LlmClientFactory;

impl LlmClientFactory {
    /// `Ok(None)` when extraction is switched off.
    pub fn create(settings: &LlmSettings) -> Result<Option<Arc<dyn LlmClient>>, LlmClientError> {
        let api_key = settings.api_key.clone().filter(|k| !k.is_empty());

        let client = match settings.provider {
            BackendProvider::Disabled => return Ok(None),
            BackendProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    LlmClientError::NotConfigured(
                        "api_key required for the openai provider".to_string(),
                    )
                })?;
                let base_url = settings.base_url.as_deref().unwrap_or(OPENAI_BASE_URL);
                OpenAiChatClient::new(base_url, Some(key), settings.model.clone())
            }
            BackendProvider::Compatible => {
                let base_url = settings.base_url.as_deref().ok_or_else(|| {
                    LlmClientError::NotConfigured(
                        "base_url required for the compatible provider".to_string(),
                    )
                })?;
                OpenAiChatClient::new(base_url, api_key, settings.model.clone())
            }
        };

        Ok(Some(Arc::new(client)))
    }
}
