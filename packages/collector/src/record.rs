//! The record submitted to the ingestion API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin of an ingested record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Web,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
        }
    }
}

/// Payload POSTed to the ingestion endpoint.
///
/// Serializes as `{"url": ..., "raw_content": ..., "source_type": "web"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRecord {
    /// Source URL, exactly as given to the pipeline
    pub url: String,

    /// Processed page text
    pub raw_content: String,

    pub source_type: SourceType,
}

impl IngestRecord {
    /// Build a record for scraped web content.
    pub fn web(url: impl Into<String>, raw_content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            raw_content: raw_content.into(),
            source_type: SourceType::Web,
        }
    }

    /// Check if this record has content worth submitting.
    pub fn has_content(&self) -> bool {
        !self.raw_content.is_empty()
    }
}

/// What the ingestion API reported for an accepted record.
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    /// Accepted status (200 or 201)
    pub status: u16,

    /// Length in bytes of the submitted content
    pub content_length: usize,

    /// Response body, when the API answered with JSON
    pub response: Option<serde_json::Value>,

    /// When the API accepted the record
    pub submitted_at: DateTime<Utc>,
}
