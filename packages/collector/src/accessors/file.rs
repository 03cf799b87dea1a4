//! Local file accessor.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

use super::html::extract_body_text;
use crate::error::{AccessError, AccessResult};
use crate::traits::accessor::ContentAccessor;

/// Accessor that reads content from the local filesystem.
///
/// Accepts plain paths or `file://` URLs. HTML files (`.html`, `.htm`) go
/// through the same body text extraction as web pages; anything else is
/// returned verbatim.
#[derive(Debug, Default, Clone)]
pub struct FileAccessor;

impl FileAccessor {
    pub fn new() -> Self {
        Self
    }
}

/// Resolve a `file:` URL or plain path to a filesystem path.
fn local_path(location: &str) -> AccessResult<PathBuf> {
    if !location.starts_with("file:") {
        return Ok(PathBuf::from(location));
    }

    Url::parse(location)
        .ok()
        .and_then(|u| u.to_file_path().ok())
        .ok_or_else(|| AccessError::InvalidUrl {
            url: location.to_string(),
        })
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

#[async_trait]
impl ContentAccessor for FileAccessor {
    async fn fetch(&self, url: &str) -> AccessResult<String> {
        let path = local_path(url)?;
        debug!(path = %path.display(), "Reading local file");

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| AccessError::Io {
                path: path.display().to_string(),
                source,
            })?;

        if is_html(&path) {
            Ok(extract_body_text(&raw))
        } else {
            Ok(raw)
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_plain_text_verbatim() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"  plain <b>text</b>\n").unwrap();

        let content = FileAccessor::new()
            .fetch(file.path().to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(content, "  plain <b>text</b>\n");
    }

    #[tokio::test]
    async fn test_extracts_body_text_from_html_file_url() {
        let mut file = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
        file.write_all(b"<html><body><p>From disk</p></body></html>")
            .unwrap();
        let url = format!("file://{}", file.path().display());

        let content = FileAccessor::new().fetch(&url).await.unwrap();

        assert_eq!(content, "From disk");
    }

    #[tokio::test]
    async fn test_file_url_is_percent_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my page.txt");
        std::fs::write(&path, "spaced out").unwrap();
        let url = Url::from_file_path(&path).unwrap();
        assert!(url.as_str().contains("my%20page.txt"));

        let content = FileAccessor::new().fetch(url.as_str()).await.unwrap();

        assert_eq!(content, "spaced out");
    }

    #[tokio::test]
    async fn test_file_url_with_localhost_authority() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my page.txt");
        std::fs::write(&path, "local").unwrap();
        let url = format!("file://localhost{}", path.display());

        let content = FileAccessor::new().fetch(&url).await.unwrap();

        assert_eq!(content, "local");
    }

    #[tokio::test]
    async fn test_file_url_with_remote_host_is_invalid() {
        let err = FileAccessor::new()
            .fetch("file://fileserver.example/share/page.txt")
            .await
            .unwrap_err();

        assert!(matches!(err, AccessError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = FileAccessor::new()
            .fetch("/definitely/not/here.txt")
            .await
            .unwrap_err();

        assert!(matches!(err, AccessError::Io { .. }));
    }
}
