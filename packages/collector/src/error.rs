//! Typed errors for the collector library.
//!
//! Uses `thiserror` for library errors (not `anyhow`); the `crawler`
//! binary wraps these with `anyhow` context at the edge.

use thiserror::Error;

/// Errors that can occur while running the ingestion pipeline.
///
/// Each variant maps to one pipeline stage. The first error aborts the run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Content retrieval failed
    #[error("failed to fetch content: {0}")]
    Fetch(#[from] AccessError),

    /// Retrieval succeeded but produced no text
    #[error("no content extracted from {url}")]
    EmptyContent { url: String },

    /// Text engine failed
    #[error("failed to process content: {0}")]
    Processing(#[from] EngineError),

    /// Ingestion API rejected the record or could not be reached
    #[error("failed to submit content: {0}")]
    Submission(#[from] SubmitError),

    /// Startup configuration is unusable
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by content accessors.
#[derive(Debug, Error)]
pub enum AccessError {
    /// URL could not be parsed or has no host
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Request ended up on a host outside the allow-list
    #[error("forbidden host for {url} (allowed: {allowed})")]
    HostNotAllowed { url: String, allowed: String },

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Page answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Local read failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by text engines.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("text engine failed: {reason}")]
    Failed { reason: String },
}

/// Errors raised while submitting a record to the ingestion API.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Record could not be serialized
    #[error("JSON serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Transport failure talking to the API
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// API answered with something other than 200/201
    #[error("API returned status: {status}")]
    Rejected { status: u16, body: String },
}

impl SubmitError {
    /// Status code observed from the API, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a target URL is required (pass --url or set CRAWLER_URL)")]
    MissingUrl,

    #[error("invalid {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Result type alias for accessor operations.
pub type AccessResult<T> = std::result::Result<T, AccessError>;

/// Result type alias for text engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Result type alias for submission operations.
pub type SubmitResult<T> = std::result::Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_carries_status() {
        let err = IngestError::from(SubmitError::Rejected {
            status: 500,
            body: "boom".to_string(),
        });

        assert!(err.to_string().contains("500"));
        match err {
            IngestError::Submission(inner) => assert_eq!(inner.status(), Some(500)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fetch_error_wraps_source() {
        let err = IngestError::from(AccessError::Status {
            url: "https://example.com".to_string(),
            status: 404,
        });

        assert_eq!(
            err.to_string(),
            "failed to fetch content: HTTP 404 for https://example.com"
        );
    }
}
