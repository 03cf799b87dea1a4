//! Single-page web collector.
//!
//! Fetches one page, extracts its text, optionally transforms it, and
//! forwards the result to the core API's ingestion endpoint.
//!
//! # Usage
//!
//! ```rust,ignore
//! use collector::{IngestionManager, PassthroughEngine, WebPageAccessor};
//!
//! let manager = IngestionManager::new(
//!     WebPageAccessor::new()?,
//!     PassthroughEngine::new(),
//!     collector::DEFAULT_API_URL,
//! );
//! let outcome = manager.ingest("https://example.com").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Pipeline capabilities (ContentAccessor, TextEngine)
//! - [`accessors`] - Content accessors (web, file, mock)
//! - [`engines`] - Text engines (passthrough, whitespace, mock)
//! - [`manager`] - The fetch → process → submit coordinator
//! - [`submitter`] - Ingestion API client
//! - [`config`] - CLI and environment configuration

pub mod accessors;
pub mod config;
pub mod engines;
pub mod error;
pub mod manager;
pub mod record;
pub mod submitter;
pub mod traits;

pub use error::{AccessError, ConfigError, EngineError, IngestError, Result, SubmitError};
pub use traits::{accessor::ContentAccessor, engine::TextEngine};

pub use accessors::{FileAccessor, MockAccessor, WebPageAccessor};
pub use config::{Cli, Config, EngineKind, SourceKind};
pub use engines::{MockEngine, PassthroughEngine, WhitespaceEngine};
pub use manager::IngestionManager;
pub use record::{IngestOutcome, IngestRecord, SourceType};
pub use submitter::{IngestClient, DEFAULT_API_URL};
