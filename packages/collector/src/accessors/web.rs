//! Web page accessor.
//!
//! Fetches one page over HTTP and returns the visible text of its body.
//! Requests are pinned to the host of the requested URL: redirects to any
//! other host are refused.

use async_trait::async_trait;
use reqwest::{header, redirect};
use tracing::{debug, warn};
use url::Url;

use super::html::extract_body_text;
use crate::error::{AccessError, AccessResult};
use crate::traits::accessor::ContentAccessor;

/// Maximum redirects followed within the allowed host.
const MAX_REDIRECTS: usize = 10;

/// Accessor that fetches a web page and extracts its body text.
///
/// # Example
///
/// ```rust,ignore
/// use collector::accessors::WebPageAccessor;
///
/// let accessor = WebPageAccessor::new()?;
/// let text = accessor.fetch("https://example.com").await?;
/// ```
pub struct WebPageAccessor {
    client: reqwest::Client,
    user_agent: String,
}

impl WebPageAccessor {
    /// Create a new web accessor with a same-host redirect policy.
    pub fn new() -> AccessResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(same_host_policy())
            .build()
            .map_err(|e| AccessError::Http(Box::new(e)))?;

        Ok(Self {
            client,
            user_agent: "CollectorBot/1.0".to_string(),
        })
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    ///
    /// The final host is still checked after the response arrives, even if
    /// the client follows cross-host redirects.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

/// Host a URL is allowed to be fetched from.
pub fn allowed_host(url: &str) -> AccessResult<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .ok_or_else(|| AccessError::InvalidUrl {
            url: url.to_string(),
        })
}

/// Follow redirects only while they stay on the original host.
fn same_host_policy() -> redirect::Policy {
    redirect::Policy::custom(|attempt| {
        if attempt.previous().len() > MAX_REDIRECTS {
            return attempt.error("too many redirects");
        }
        let same_host = attempt.url().host_str()
            == attempt.previous().first().and_then(|u| u.host_str());
        if same_host {
            attempt.follow()
        } else {
            attempt.stop()
        }
    })
}

#[async_trait]
impl ContentAccessor for WebPageAccessor {
    async fn fetch(&self, url: &str) -> AccessResult<String> {
        let allowed = allowed_host(url)?;
        debug!(url = %url, allowed_host = %allowed, "HTTP fetch starting");

        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                AccessError::Http(Box::new(e))
            })?;

        let status = response.status();

        // A stopped redirect points somewhere we refuse to go
        if status.is_redirection() {
            let target = response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|location| response.url().join(location).ok());
            if let Some(target) = target {
                if target.host_str() != Some(allowed.as_str()) {
                    warn!(url = %url, target = %target, "Redirect to forbidden host");
                    return Err(AccessError::HostNotAllowed {
                        url: target.to_string(),
                        allowed,
                    });
                }
            }
        }

        if !status.is_success() {
            return Err(AccessError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        if final_url.host_str() != Some(allowed.as_str()) {
            return Err(AccessError::HostNotAllowed {
                url: final_url.to_string(),
                allowed,
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| AccessError::Http(Box::new(e)))?;

        let content = extract_body_text(&html);
        debug!(
            url = %url,
            html_length = html.len(),
            content_length = content.len(),
            "Page fetched"
        );

        Ok(content)
    }

    fn name(&self) -> &str {
        "web"
    }
}
