use std::sync::Arc;

use crate::application::services::{
    AudioSubmissionService, ExtractionService, FeaturePersistenceService,
};
use crate::presentation::config::UploadSettings;

#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<AudioSubmissionService>,
    pub extraction_service: Arc<ExtractionService>,
    /// `None` when no relational store is reachable.
    pub persistence_service: Option<Arc<FeaturePersistenceService>>,
    pub upload: UploadSettings,
}
