use std::fmt;

use serde::{Serialize, Serializer};

/// Titles containing any of these (case-insensitive) mark placeholder records.
const PLACEHOLDER_TITLE_MARKERS: [&str; 2] = ["parse error", "fallback"];

/// Model-supplied priority. Strings outside the prompted vocabulary are
/// kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        match s {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            other => Priority::Other(other.to_string()),
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::from(s.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Model-supplied category, verbatim like [`Priority`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Enhancement,
    BugFix,
    NewFeature,
    Improvement,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Enhancement => "enhancement",
            Category::BugFix => "bug-fix",
            Category::NewFeature => "new-feature",
            Category::Improvement => "improvement",
            Category::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "enhancement" => Category::Enhancement,
            "bug-fix" => Category::BugFix,
            "new-feature" => Category::NewFeature,
            "improvement" => Category::Improvement,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from(s.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One feature request as returned by the extraction stage.
///
/// `id` is whatever the model (or a fallback) supplied; persisted rows get
/// their own identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequestRecord {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub confidence: Option<f64>,
    pub potential_recommendation: Option<String>,
}

impl FeatureRequestRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            priority: None,
            category: None,
            confidence: None,
            potential_recommendation: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }

    pub fn with_potential_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.potential_recommendation = Some(recommendation.into());
        self
    }

    /// A record is worth persisting when it carries a real title.
    pub fn is_actionable(&self) -> bool {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => {
                let lowered = title.to_lowercase();
                !PLACEHOLDER_TITLE_MARKERS
                    .iter()
                    .any(|marker| lowered.contains(marker))
            }
            _ => false,
        }
    }
}
