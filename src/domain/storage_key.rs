use std::fmt;

use super::AudioFileId;

/// Object store key of an uploaded recording: `audio/<audio file id>/<file name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(audio_file_id: &AudioFileId, file_name: &str) -> Self {
        Self(format!(
            "audio/{}/{}",
            audio_file_id.as_uuid(),
            sanitize_file_name(file_name)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn sanitize_file_name(file_name: &str) -> String {
    let sanitized: String = file_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let sanitized = sanitized.trim_start_matches('.');
    if sanitized.is_empty() {
        "audio".to_string()
    } else {
        sanitized.to_string()
    }
}
