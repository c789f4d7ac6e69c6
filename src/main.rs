use std::sync::Arc;

use tokio::net::TcpListener;

use voxtract::application::ports::{AudioStore, GenerationParams, LlmClient, TranscriptionEngine};
use voxtract::application::services::{
    AudioSubmissionService, BalancedBraceLocator, ExtractionService, FeaturePersistenceService,
    GreedyBraceLocator, JsonSpanLocator, TranscriptionService,
};
use voxtract::infrastructure::audio::TranscriptionEngineFactory;
use voxtract::infrastructure::llm::LlmClientFactory;
use voxtract::infrastructure::observability::init_tracing;
use voxtract::infrastructure::persistence::{
    PgAudioFileRepository, PgFeatureRequestRepository, create_pool,
};
use voxtract::infrastructure::storage::AudioStoreFactory;
use voxtract::presentation::config::{DatabaseSettings, JsonSpanStrategy};
use voxtract::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&settings.logging, environment);

    let transcription_engine: Option<Arc<dyn TranscriptionEngine>> =
        TranscriptionEngineFactory::create(&settings.transcription).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Speech-to-text backend unavailable, mock transcription will be used");
            None
        });

    let llm_client: Option<Arc<dyn LlmClient>> = LlmClientFactory::create(&settings.llm)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Language model unavailable, fallback extraction will be used");
            None
        });

    let audio_store: Option<Arc<dyn AudioStore>> = AudioStoreFactory::create(&settings.storage)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Blob store unavailable, uploads will not be stored");
            None
        });

    let persistence_service = connect_persistence(&settings.database).await;

    let locator: Arc<dyn JsonSpanLocator> = match settings.extraction.json_span {
        JsonSpanStrategy::Greedy => Arc::new(GreedyBraceLocator),
        JsonSpanStrategy::Balanced => Arc::new(BalancedBraceLocator),
    };

    let extraction_service = Arc::new(ExtractionService::new(
        llm_client,
        GenerationParams {
            max_output_tokens: settings.llm.max_output_tokens,
            temperature: settings.llm.temperature,
        },
        locator,
        settings.fallback.extraction_delay(),
    ));

    let transcription_service = Arc::new(TranscriptionService::new(
        transcription_engine,
        Arc::clone(&extraction_service),
        settings.fallback.transcription_delay(),
    ));

    let submission_service = Arc::new(AudioSubmissionService::new(
        transcription_service,
        audio_store,
        persistence_service.clone(),
    ));

    let state = AppState {
        submission_service,
        extraction_service,
        persistence_service,
        upload: settings.upload,
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, environment = %environment, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn connect_persistence(settings: &DatabaseSettings) -> Option<Arc<FeaturePersistenceService>> {
    let Some(url) = settings.url.as_deref() else {
        tracing::warn!("No database configured, feature requests will not be persisted");
        return None;
    };

    match create_pool(url, settings.max_connections).await {
        Ok(pool) => Some(Arc::new(FeaturePersistenceService::new(
            Arc::new(PgAudioFileRepository::new(pool.clone())),
            Arc::new(PgFeatureRequestRepository::new(pool)),
        ))),
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable, feature requests will not be persisted");
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
