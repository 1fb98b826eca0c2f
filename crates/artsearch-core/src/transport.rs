use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

/// HTTP transport used by connectors.
///
/// Implementors perform a GET against a fully formed URL and return the raw
/// response body. A response may be served from a local cache if it is no
/// older than `max_stale`.
///
/// Connectors treat every error from this trait as "no results": they log
/// it and return an empty result to their caller.
///
/// # Examples
///
/// ```
/// use artsearch_core::{Result, SearchTransport};
/// use async_trait::async_trait;
/// use bytes::Bytes;
/// use std::time::Duration;
///
/// struct Canned(&'static str);
///
/// #[async_trait]
/// impl SearchTransport for Canned {
///     async fn get(&self, _url: &str, _max_stale: Duration) -> Result<Bytes> {
///         Ok(Bytes::from_static(self.0.as_bytes()))
///     }
/// }
/// ```
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Fetches the body at `url`, tolerating a cached copy up to `max_stale` old.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The URL cannot be parsed
    /// - The network request fails or times out
    /// - The server answers with a non-success status
    async fn get(&self, url: &str, max_stale: Duration) -> Result<Bytes>;
}
