use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_output_tokens: 900,
            temperature: 0.2,
        }
    }
}

/// Generated text as reported by the backend. Some backends fill a
/// top-level `response`, chat-style ones fill `text`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOutput {
    pub response: Option<String>,
    pub text: Option<String>,
}

impl GenerationOutput {
    pub fn into_text(self) -> String {
        self.response
            .filter(|r| !r.trim().is_empty())
            .or(self.text)
            .unwrap_or_default()
    }
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(
        &self,
        prompt: &ChatPrompt,
        params: &GenerationParams,
    ) -> Result<GenerationOutput, LlmClientError>;

    fn model(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("text-generation backend unavailable")]
    Unavailable,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("client not configured: {0}")]
    NotConfigured(String),
}
