use voxtract::application::ports::{AudioFileRepository, FeatureRequestRepository, RepositoryError};
use voxtract::domain::{
    AudioFile, AudioFileId, Category, FeatureRequestRecord, FeatureRequestRow, Priority,
    StorageKey,
};
use voxtract::infrastructure::persistence::ensure_schema;

use crate::helpers::test_postgres::TestPostgres;

fn audio_file() -> AudioFile {
    let id = AudioFileId::new();
    AudioFile::new(
        id,
        "idea.wav".to_string(),
        "audio/wav".to_string(),
        2048,
        Some(StorageKey::new(&id, "idea.wav")),
    )
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_concurrent_schema_setup_when_ensuring_schema_then_all_succeed() {
    let pg = TestPostgres::new().await;

    let results = ensure_schema_concurrently(&pg).await;

    assert!(results.iter().all(Result::is_ok));
    ensure_schema(&pg.pool).await.unwrap();
}

async fn ensure_schema_concurrently(pg: &TestPostgres) -> Vec<Result<(), RepositoryError>> {
    let (a, b, c) = tokio::join!(
        ensure_schema(&pg.pool),
        pg.audio_file_repository.ensure_schema(),
        pg.feature_request_repository.ensure_schema(),
    );
    vec![a, b, c]
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_persisted_rows_when_listing_then_returns_them_in_insert_order() {
    let pg = TestPostgres::new().await;
    pg.audio_file_repository.ensure_schema().await.unwrap();

    let file = audio_file();
    pg.audio_file_repository.create(&file).await.unwrap();

    let summary = Some("two requests".to_string());
    let rows = vec![
        FeatureRequestRow::from_record(
            file.id,
            &FeatureRequestRecord::new("1")
                .with_title("Add dark mode")
                .with_priority(Priority::High)
                .with_category(Category::NewFeature)
                .with_confidence(0.9)
                .with_potential_recommendation("Theme toggle\nRespect OS setting"),
            summary.clone(),
        ),
        FeatureRequestRow::from_record(
            file.id,
            &FeatureRequestRecord::new("2").with_title("Bulk export"),
            summary.clone(),
        ),
    ];
    pg.feature_request_repository.create_many(&rows).await.unwrap();

    let listed = pg
        .feature_request_repository
        .list_by_audio_file(file.id)
        .await
        .unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, rows[0].id);
    assert_eq!(listed[0].priority, Some(Priority::High));
    assert_eq!(listed[0].category, Some(Category::NewFeature));
    assert_eq!(listed[0].confidence, Some(0.9));
    assert_eq!(
        listed[0].potential_recommendation.as_deref(),
        Some("Theme toggle\nRespect OS setting")
    );
    assert_eq!(listed[1].title.as_deref(), Some("Bulk export"));
    assert!(listed.iter().all(|r| r.summary == summary));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_placeholder_row_when_listing_then_content_fields_are_null() {
    let pg = TestPostgres::new().await;
    pg.audio_file_repository.ensure_schema().await.unwrap();

    let file = audio_file();
    pg.audio_file_repository.create(&file).await.unwrap();
    pg.feature_request_repository
        .create_many(&[FeatureRequestRow::placeholder(
            file.id,
            Some("nothing actionable".to_string()),
        )])
        .await
        .unwrap();

    let listed = pg
        .feature_request_repository
        .list_by_audio_file(file.id)
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert!(listed[0].is_placeholder());
    assert_eq!(listed[0].summary.as_deref(), Some("nothing actionable"));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_row_for_unknown_audio_file_when_inserting_then_fails_and_writes_nothing() {
    let pg = TestPostgres::new().await;
    pg.feature_request_repository.ensure_schema().await.unwrap();

    let orphan = AudioFileId::new();
    let result = pg
        .feature_request_repository
        .create_many(&[FeatureRequestRow::placeholder(orphan, None)])
        .await;

    assert!(result.is_err());
    let listed = pg
        .feature_request_repository
        .list_by_audio_file(orphan)
        .await
        .unwrap();
    assert!(listed.is_empty());
}
