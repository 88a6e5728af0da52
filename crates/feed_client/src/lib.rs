use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::domain::Transition;
use tracing::{debug, warn};
use url::Url;

pub mod parser;
pub mod worker;

pub use parser::parse_transitions;

/// Feed published by the release team. One plain GET, no authentication, no
/// pagination, no conditional fetch.
pub const DEFAULT_FEED_URL: &str = "https://release.debian.org/transitions/export/packages.yaml";

/// Upper bound on one feed round trip.
pub const FEED_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Capability to retrieve the raw feed text. Injectable so tests can stand
/// in for the network.
#[async_trait]
pub trait FeedTransport: Send + Sync {
    /// Retrieves the document at `url` within `timeout`. A non-success
    /// status is an error; there are no retries.
    async fn fetch_text(&self, url: &Url, timeout: Duration) -> Result<String>;
}

/// Production transport: a timed HTTPS GET over a shared client.
pub struct HttpFeedTransport {
    http: Client,
}

impl HttpFeedTransport {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

impl Default for HttpFeedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedTransport for HttpFeedTransport {
    async fn fetch_text(&self, url: &Url, timeout: Duration) -> Result<String> {
        let response = self
            .http
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .with_context(|| format!("feed request failed: {url}"))?
            .error_for_status()?;
        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read feed body: {url}"))?;
        Ok(body)
    }
}

/// Fetches and parses the transition feed.
pub struct TransitionFeed {
    transport: Arc<dyn FeedTransport>,
}

impl TransitionFeed {
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpFeedTransport::new()))
    }

    pub fn with_transport(transport: Arc<dyn FeedTransport>) -> Self {
        Self { transport }
    }

    /// Best-effort refresh: any failure yields the empty list.
    ///
    /// An empty result is what the consumer already renders for "no data
    /// yet", so a failed refresh never panics, errors, or retries past this
    /// boundary. The cause is logged; callers that need to distinguish
    /// failure from a genuinely empty feed use
    /// [`try_fetch`](Self::try_fetch).
    pub async fn fetch(&self, url: &Url, timeout: Duration) -> Vec<Transition> {
        match self.try_fetch(url, timeout).await {
            Ok(transitions) => transitions,
            Err(err) => {
                warn!("feed refresh failed, presenting an empty feed: {err:#}");
                Vec::new()
            }
        }
    }

    /// Same pipeline as [`fetch`](Self::fetch) with the failure surfaced.
    pub async fn try_fetch(&self, url: &Url, timeout: Duration) -> Result<Vec<Transition>> {
        let body = self.transport.fetch_text(url, timeout).await?;
        let transitions = parser::parse_transitions(&body);
        debug!(count = transitions.len(), "parsed transition feed");
        Ok(transitions)
    }
}

impl Default for TransitionFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
