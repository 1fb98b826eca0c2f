//! HTTP transport with a short-lived in-memory response cache.
//!
//! Every request carries a `Cache-Control: max-stale=<secs>` directive so
//! intermediate caches may answer with a slightly stale copy. Responses are
//! also kept in memory and reused while they are younger than the requested
//! staleness window. Entries past the window they were fetched with are
//! evicted whenever a new response is stored.

use crate::error::{Result, SearchError};
use crate::transport::SearchTransport;
use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use reqwest::Url;
use reqwest::header::CACHE_CONTROL;
use std::time::{Duration, Instant};

/// Request timeout used by [`HttpCache::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("artsearch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
struct CachedResponse {
    body: Bytes,
    fetched_at: Instant,
    max_stale: Duration,
}

impl CachedResponse {
    fn is_expired(&self) -> bool {
        self.fetched_at.elapsed() > self.max_stale
    }
}

/// Cached HTTP GET transport backed by `reqwest`.
///
/// Safe to share between concurrent searches behind an `Arc`.
#[derive(Debug)]
pub struct HttpCache {
    client: reqwest::Client,
    entries: DashMap<String, CachedResponse>,
}

impl HttpCache {
    /// Creates a cache with the default timeout and user agent.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self::with_client(client)
    }

    /// Creates a cache with a custom request timeout and user agent.
    pub fn with_settings(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::CacheError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            entries: DashMap::new(),
        }
    }

    /// Returns the body for `url`, reusing a cached copy no older than `max_stale`.
    pub async fn get_cached(&self, url: &str, max_stale: Duration) -> Result<Bytes> {
        let parsed = Url::parse(url).map_err(|e| SearchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if let Some(entry) = self.entries.get(url)
            && entry.fetched_at.elapsed() <= max_stale
        {
            tracing::debug!(%url, "serving response from cache");
            return Ok(entry.body.clone());
        }

        let body = self.fetch(parsed, max_stale).await?;
        self.evict_expired();
        self.entries.insert(
            url.to_string(),
            CachedResponse {
                body: body.clone(),
                fetched_at: Instant::now(),
                max_stale,
            },
        );
        Ok(body)
    }

    fn evict_expired(&self) {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let evicted = before.saturating_sub(self.entries.len());
        if evicted > 0 {
            tracing::debug!(evicted, "evicted expired cache entries");
        }
    }

    async fn fetch(&self, url: Url, max_stale: Duration) -> Result<Bytes> {
        let url_text = url.to_string();
        let http_err = |source| SearchError::Http {
            url: url_text.clone(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, format!("max-stale={}", max_stale.as_secs()))
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?;

        response.bytes().await.map_err(http_err)
    }

    /// Drops every cached response.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HttpCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchTransport for HttpCache {
    async fn get(&self, url: &str, max_stale: Duration) -> Result<Bytes> {
        self.get_cached(url, max_stale).await
    }
}
