//! Text engine trait for pluggable text processing.
//!
//! Engines sit between retrieval and submission. The default engine passes
//! text through untouched; cleaning or summarizing engines can replace it
//! without changes to the caller.

use async_trait::async_trait;

use crate::error::EngineResult;

/// Transforms raw text into processed text.
#[async_trait]
pub trait TextEngine: Send + Sync {
    /// Process `raw` text. Empty input is valid.
    async fn process(&self, raw: &str) -> EngineResult<String>;

    /// Get the engine name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

#[async_trait]
impl<T: TextEngine + ?Sized> TextEngine for Box<T> {
    async fn process(&self, raw: &str) -> EngineResult<String> {
        (**self).process(raw).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
