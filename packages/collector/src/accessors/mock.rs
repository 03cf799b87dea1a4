//! Mock accessor for testing.
//!
//! Provides a configurable mock implementation of the ContentAccessor trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{AccessError, AccessResult};
use crate::traits::accessor::ContentAccessor;

#[derive(Debug, Clone)]
enum MockResponse {
    Content(String),
    Failure(String),
}

/// Mock accessor for testing.
///
/// Returns canned content or failures by URL and records every fetch.
/// Unknown URLs fail with an HTTP error.
///
/// # Example
///
/// ```rust
/// use collector::accessors::MockAccessor;
///
/// let mock = MockAccessor::new().with_content("http://example.com", "Hello world");
/// assert_eq!(mock.fetch_call_count(), 0);
/// ```
#[derive(Default, Clone)]
pub struct MockAccessor {
    /// Canned responses indexed by URL
    responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    /// Track calls for verification
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockAccessor {
    /// Create a new empty mock accessor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `content` when `url` is fetched.
    pub fn add_content(&self, url: impl Into<String>, content: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), MockResponse::Content(content.into()));
    }

    /// Fail with an HTTP error carrying `message` when `url` is fetched.
    pub fn add_failure(&self, url: impl Into<String>, message: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), MockResponse::Failure(message.into()));
    }

    /// Builder form of [`add_content`](Self::add_content).
    pub fn with_content(self, url: impl Into<String>, content: impl Into<String>) -> Self {
        self.add_content(url, content);
        self
    }

    /// Builder form of [`add_failure`](Self::add_failure).
    pub fn with_failure(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.add_failure(url, message);
        self
    }

    /// Get the number of times fetch was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Get the URLs that were fetched, in order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ContentAccessor for MockAccessor {
    async fn fetch(&self, url: &str) -> AccessResult<String> {
        self.fetch_calls.write().unwrap().push(url.to_string());

        let response = self.responses.read().unwrap().get(url).cloned();
        match response {
            Some(MockResponse::Content(content)) => Ok(content),
            Some(MockResponse::Failure(message)) => Err(AccessError::Http(message.into())),
            None => Err(AccessError::Http(
                format!("no mock content for {}", url).into(),
            )),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_canned_content() {
        let mock = MockAccessor::new().with_content("http://example.com", "Hello world");

        let content = mock.fetch("http://example.com").await.unwrap();

        assert_eq!(content, "Hello world");
        assert_eq!(mock.fetch_calls(), vec!["http://example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_failure_and_unknown_url() {
        let mock = MockAccessor::new().with_failure("http://down.example", "connection refused");

        let err = mock.fetch("http://down.example").await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));

        let err = mock.fetch("http://unknown.example").await.unwrap_err();
        assert!(matches!(err, AccessError::Http(_)));
        assert_eq!(mock.fetch_call_count(), 2);
    }
}
