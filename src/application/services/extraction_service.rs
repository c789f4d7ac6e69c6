use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::ports::{ChatPrompt, GenerationParams, LlmClient, LlmClientError};
use crate::domain::ExtractionResult;
use crate::infrastructure::observability::preview_text;

use super::extraction_prompt::build_extraction_prompt;
use super::response_parser::{JsonSpanLocator, parse_extraction};

const UNAVAILABLE_MODEL: &str = "unavailable";

/// Second pipeline stage: transcription text in, feature requests out.
///
/// Never fails. An unreachable model yields the fallback payload, an
/// unreadable answer yields the parse-error payload.
pub struct ExtractionService {
    llm_client: Option<Arc<dyn LlmClient>>,
    params: GenerationParams,
    locator: Arc<dyn JsonSpanLocator>,
    fallback_delay: Duration,
}

impl ExtractionService {
    pub fn new(
        llm_client: Option<Arc<dyn LlmClient>>,
        params: GenerationParams,
        locator: Arc<dyn JsonSpanLocator>,
        fallback_delay: Duration,
    ) -> Self {
        Self {
            llm_client,
            params,
            locator,
            fallback_delay,
        }
    }

    fn model_identifier(&self) -> String {
        self.llm_client
            .as_ref()
            .map(|client| client.model().to_string())
            .unwrap_or_else(|| UNAVAILABLE_MODEL.to_string())
    }

    #[tracing::instrument(skip(self, transcription), fields(transcription_chars = transcription.len()))]
    pub async fn extract(&self, transcription: &str) -> ExtractionResult {
        let started = Instant::now();
        let prompt = build_extraction_prompt(transcription);
        let model = self.model_identifier();

        let answer = match self.generate(&prompt).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, model = %model, "Feature extraction backend failed, using fallback");
                tokio::time::sleep(self.fallback_delay).await;
                return ExtractionResult::fallback(e.to_string(), elapsed_ms(started), model);
            }
        };

        match parse_extraction(&answer, self.locator.as_ref()) {
            Ok(parsed) => {
                tracing::info!(
                    requests = parsed.requests.len(),
                    model = %model,
                    "Feature extraction completed"
                );
                ExtractionResult {
                    requests: parsed.requests,
                    summary: parsed.summary,
                    extraction_duration_ms: elapsed_ms(started),
                    model_identifier: model,
                    error_detail: None,
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    answer = %preview_text(&answer),
                    "Could not parse feature extraction answer"
                );
                ExtractionResult::parse_error(elapsed_ms(started), model)
            }
        }
    }

    async fn generate(&self, prompt: &ChatPrompt) -> Result<String, LlmClientError> {
        let client = self.llm_client.as_ref().ok_or(LlmClientError::Unavailable)?;
        let output = client.generate(prompt, &self.params).await?;
        Ok(output.into_text())
    }
}

pub(crate) fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
