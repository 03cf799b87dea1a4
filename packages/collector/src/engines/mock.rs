//! Mock engine for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{EngineError, EngineResult};
use crate::traits::engine::TextEngine;

#[derive(Debug, Clone, Default)]
enum Behavior {
    #[default]
    Echo,
    Output(String),
    Fail(String),
}

/// Mock text engine.
///
/// Echoes its input by default; can be set to return a fixed output or to
/// fail. Every input it receives is recorded.
#[derive(Default, Clone)]
pub struct MockEngine {
    behavior: Behavior,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockEngine {
    /// Create an echoing mock engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always return `output`.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.behavior = Behavior::Output(output.into());
        self
    }

    /// Always fail with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.behavior = Behavior::Fail(reason.into());
        self
    }

    /// Get the number of times process was called.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Get the inputs process was called with.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl TextEngine for MockEngine {
    async fn process(&self, raw: &str) -> EngineResult<String> {
        self.calls.write().unwrap().push(raw.to_string());

        match &self.behavior {
            Behavior::Echo => Ok(raw.to_string()),
            Behavior::Output(output) => Ok(output.clone()),
            Behavior::Fail(reason) => Err(EngineError::Failed {
                reason: reason.clone(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
