//! Client for the ingestion API.
//!
//! Sends one [`IngestRecord`] per call as a JSON POST. Only `200 OK` and
//! `201 Created` count as accepted.

use chrono::Utc;
use reqwest::{header, StatusCode};
use tracing::{debug, warn};

use crate::error::{SubmitError, SubmitResult};
use crate::record::{IngestOutcome, IngestRecord};

/// Default ingestion endpoint of the core API.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/internal/ingest";

/// Bytes of the API response body read at most.
const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Characters of a rejected response body kept for diagnosis.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for the ingestion endpoint.
#[derive(Debug, Clone)]
pub struct IngestClient {
    client: reqwest::Client,
    api_url: String,
}

impl IngestClient {
    /// Create a client posting to `api_url`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Submit a record.
    pub async fn submit(&self, record: &IngestRecord) -> SubmitResult<IngestOutcome> {
        let body = serde_json::to_vec(record)?;
        debug!(
            api_url = %self.api_url,
            url = %record.url,
            payload_bytes = body.len(),
            "Submitting record"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!(api_url = %self.api_url, error = %e, "Ingestion request failed");
                SubmitError::Http(Box::new(e))
            })?;

        let status = response.status();
        // The body is informational only
        let text = read_body(response, MAX_RESPONSE_BYTES).await;

        if !is_accepted(status) {
            warn!(api_url = %self.api_url, status = status.as_u16(), "Ingestion API rejected record");
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body: truncate(&text, MAX_ERROR_BODY_CHARS),
            });
        }

        Ok(IngestOutcome {
            status: status.as_u16(),
            content_length: record.raw_content.len(),
            response: serde_json::from_str(&text).ok(),
            submitted_at: Utc::now(),
        })
    }
}

fn is_accepted(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

/// Read at most `max_bytes` of the response body.
///
/// A body that fails mid-read yields whatever arrived before the failure.
async fn read_body(mut response: reqwest::Response, max_bytes: usize) -> String {
    let mut buf = Vec::new();
    while buf.len() < max_bytes {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let take = chunk.len().min(max_bytes - buf.len());
                buf.extend_from_slice(&chunk[..take]);
            }
            Ok(None) => break,
            Err(e) => {
                debug!(error = %e, "Failed to read ingestion API response body");
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
