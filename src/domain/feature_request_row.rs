use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{AudioFileId, Category, FeatureRequestRecord, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureRequestId(Uuid);

impl FeatureRequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for FeatureRequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// A stored feature request. `summary` is duplicated onto every row of
/// the same extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRequestRow {
    pub id: FeatureRequestId,
    pub audio_file_id: AudioFileId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub confidence: Option<f64>,
    pub potential_recommendation: Option<String>,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FeatureRequestRow {
    pub fn from_record(
        audio_file_id: AudioFileId,
        record: &FeatureRequestRecord,
        summary: Option<String>,
    ) -> Self {
        Self {
            id: FeatureRequestId::new(),
            audio_file_id,
            title: record.title.clone(),
            description: record.description.clone(),
            priority: record.priority.clone(),
            category: record.category.clone(),
            confidence: record.confidence,
            potential_recommendation: record.potential_recommendation.clone(),
            summary,
            created_at: Utc::now(),
        }
    }

    /// Marks that extraction ran for the file without yielding anything
    /// actionable.
    pub fn placeholder(audio_file_id: AudioFileId, summary: Option<String>) -> Self {
        Self {
            id: FeatureRequestId::new(),
            audio_file_id,
            title: None,
            description: None,
            priority: None,
            category: None,
            confidence: None,
            potential_recommendation: None,
            summary,
            created_at: Utc::now(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.confidence.is_none()
            && self.potential_recommendation.is_none()
    }
}
