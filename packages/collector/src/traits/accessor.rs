//! Content accessor trait for pluggable retrieval.
//!
//! An accessor turns a location into raw text. The web accessor fetches a
//! page and extracts its body text; other implementations read local files
//! or return canned content for tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use collector::traits::accessor::ContentAccessor;
//!
//! let text = accessor.fetch("https://example.com").await?;
//! ```

use async_trait::async_trait;

use crate::error::AccessResult;

/// Retrieves raw textual content from a location.
///
/// Implementations perform exactly one retrieval per call and keep no
/// cache between calls.
#[async_trait]
pub trait ContentAccessor: Send + Sync {
    /// Fetch the text found at `url`.
    ///
    /// Transport failures are returned as-is; no retry is attempted.
    async fn fetch(&self, url: &str) -> AccessResult<String>;

    /// Get the accessor name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

#[async_trait]
impl<T: ContentAccessor + ?Sized> ContentAccessor for Box<T> {
    async fn fetch(&self, url: &str) -> AccessResult<String> {
        (**self).fetch(url).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
