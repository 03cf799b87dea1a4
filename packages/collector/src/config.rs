//! Command-line and environment configuration for the `crawler` binary.

use clap::{Parser, ValueEnum};
use url::Url;

use crate::error::{ConfigError, IngestError, Result};
use crate::submitter::DEFAULT_API_URL;

/// Where page content is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Fetch over HTTP(S)
    Web,
    /// Read a local file
    File,
}

/// Which text engine processes the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Forward text unchanged
    Passthrough,
    /// Collapse whitespace and drop blank lines
    Whitespace,
}

/// Scrape one page and forward its text to the core API.
#[derive(Debug, Parser)]
#[command(name = "crawler", version, about)]
pub struct Cli {
    /// URL to scrape
    #[arg(long, env = "CRAWLER_URL")]
    pub url: Option<String>,

    /// Core API ingestion endpoint
    #[arg(long, env = "CORE_API_URL", default_value = DEFAULT_API_URL)]
    pub api: String,

    /// Content source
    #[arg(long, value_enum, default_value = "web")]
    pub source: SourceKind,

    /// Text engine applied before submission
    #[arg(long, value_enum, default_value = "passthrough")]
    pub engine: EngineKind,
}

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub target_url: String,
    pub api_url: String,
    pub source: SourceKind,
    pub engine: EngineKind,
}

impl Config {
    /// Validate parsed arguments.
    ///
    /// Failures surface as [`IngestError::Config`].
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let target_url = cli
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(IngestError::Config(ConfigError::MissingUrl))?;

        if cli.source == SourceKind::Web && Url::parse(&target_url).is_err() {
            return Err(ConfigError::InvalidUrl {
                field: "target URL",
                value: target_url,
            }
            .into());
        }

        if Url::parse(&cli.api).is_err() {
            return Err(ConfigError::InvalidUrl {
                field: "API URL",
                value: cli.api,
            }
            .into());
        }

        Ok(Self {
            target_url,
            api_url: cli.api,
            source: cli.source,
            engine: cli.engine,
        })
    }
}
