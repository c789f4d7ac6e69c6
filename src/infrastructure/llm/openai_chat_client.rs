use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{
    ChatPrompt, GenerationOutput, GenerationParams, LlmClient, LlmClientError,
};

/// Chat completions client for OpenAI and servers mimicking its API.
pub struct OpenAiChatClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl OpenAiChatClient {
    pub fn new(base_url: &str, api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiChatClient {
    async fn generate(
        &self,
        prompt: &ChatPrompt,
        params: &GenerationParams,
    ) -> Result<GenerationOutput, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: params.max_output_tokens,
            temperature: params.temperature,
        };

        tracing::debug!(model = %self.model, max_tokens = params.max_output_tokens, "Sending chat completion request");

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        Ok(decode_generation(&body))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn decode_generation(body: &Value) -> GenerationOutput {
    let first_choice = body.get("choices").and_then(|c| c.get(0));

    let text = first_choice
        .and_then(|choice| {
            choice
                .get("message")
                .and_then(|m| m.get("content"))
                .or_else(|| choice.get("text"))
        })
        .and_then(Value::as_str)
        .map(str::to_string);

    GenerationOutput {
        response: body
            .get("response")
            .and_then(Value::as_str)
            .map(str::to_string),
        text,
    }
}
