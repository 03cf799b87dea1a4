//! Whitespace cleaning for scraped text.
//!
//! Page text tends to carry the indentation and blank lines of the HTML
//! source. This engine keeps the line structure but drops the noise.

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::traits::engine::TextEngine;

/// Engine that collapses whitespace runs and removes blank lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceEngine;

impl WhitespaceEngine {
    pub fn new() -> Self {
        Self
    }
}

fn clean(raw: &str) -> String {
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl TextEngine for WhitespaceEngine {
    async fn process(&self, raw: &str) -> EngineResult<String> {
        Ok(clean(raw))
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_runs_and_blank_lines() {
        let raw = "  Welcome\t to   the site \n\n   \n  Contact  us\r\n";

        assert_eq!(clean(raw), "Welcome to the site\nContact us");
    }

    #[tokio::test]
    async fn test_blank_input_cleans_to_empty() {
        let engine = WhitespaceEngine::new();

        assert_eq!(engine.process(" \n\t\n").await.unwrap(), "");
        assert_eq!(engine.process("").await.unwrap(), "");
    }
}
