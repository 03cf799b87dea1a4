use async_trait::async_trait;

use crate::error::EngineResult;
use crate::traits::engine::TextEngine;

/// Engine that returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughEngine;

impl PassthroughEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextEngine for PassthroughEngine {
    async fn process(&self, raw: &str) -> EngineResult<String> {
        Ok(raw.to_string())
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}
