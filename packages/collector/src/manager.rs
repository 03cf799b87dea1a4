//! Ingestion pipeline coordinator.
//!
//! Runs fetch → process → submit for a single URL:
//!
//! 1. **Fetch** - the accessor retrieves raw text; empty text stops the run
//! 2. **Process** - the text engine transforms it
//! 3. **Submit** - the record is POSTed to the ingestion API
//!
//! The first failure ends the run. Nothing is retried and nothing needs
//! rolling back.

use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::record::{IngestOutcome, IngestRecord};
use crate::submitter::IngestClient;
use crate::traits::{accessor::ContentAccessor, engine::TextEngine};

/// Coordinates one accessor, one text engine and the ingestion client.
///
/// # Example
///
/// ```rust,ignore
/// use collector::{IngestionManager, PassthroughEngine, WebPageAccessor};
///
/// let manager = IngestionManager::new(
///     WebPageAccessor::new()?,
///     PassthroughEngine::new(),
///     "http://localhost:8080/internal/ingest",
/// );
/// manager.ingest("https://example.com").await?;
/// ```
pub struct IngestionManager<A, E> {
    accessor: A,
    engine: E,
    client: IngestClient,
}

impl<A: ContentAccessor, E: TextEngine> IngestionManager<A, E> {
    /// Create a manager submitting to `api_url`.
    pub fn new(accessor: A, engine: E, api_url: impl Into<String>) -> Self {
        Self {
            accessor,
            engine,
            client: IngestClient::new(api_url),
        }
    }

    /// Replace the ingestion client.
    pub fn with_client(mut self, client: IngestClient) -> Self {
        self.client = client;
        self
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn api_url(&self) -> &str {
        self.client.api_url()
    }

    /// Run the pipeline for `url`.
    pub async fn ingest(&self, url: &str) -> Result<IngestOutcome> {
        info!(
            url = %url,
            accessor = self.accessor.name(),
            engine = self.engine.name(),
            "Starting ingestion"
        );

        let raw = self.accessor.fetch(url).await.map_err(|e| {
            warn!(url = %url, error = %e, "Fetch failed");
            IngestError::Fetch(e)
        })?;

        if raw.is_empty() {
            warn!(url = %url, "No content extracted");
            return Err(IngestError::EmptyContent {
                url: url.to_string(),
            });
        }
        debug!(url = %url, content_length = raw.len(), "Content fetched");

        let processed = self.engine.process(&raw).await.map_err(|e| {
            warn!(url = %url, error = %e, "Processing failed");
            IngestError::Processing(e)
        })?;

        let record = IngestRecord::web(url, processed);
        if !record.has_content() {
            warn!(url = %url, engine = self.engine.name(), "Engine produced no content");
            return Err(IngestError::EmptyContent {
                url: url.to_string(),
            });
        }

        let outcome = self.client.submit(&record).await?;

        info!(
            url = %url,
            status = outcome.status,
            content_length = outcome.content_length,
            "Successfully ingested content"
        );

        Ok(outcome)
    }
}
