//! Connector configuration.

use crate::error::{MavenError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public Maven Central search host.
pub const DEFAULT_BASE_URL: &str = "https://search.maven.org";

/// Settings for [`MavenCentralSearch`](crate::MavenCentralSearch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralConfig {
    /// Scheme and host of the search service, without the `/solrsearch` path.
    pub base_url: String,
    /// How old a cached response may be before it is fetched again.
    pub max_stale_secs: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for CentralConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_stale_secs: 300,
            timeout_secs: 30,
            user_agent: concat!("artsearch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CentralConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(MavenError::InvalidConfig {
                message: format!("base_url '{}' must be an http(s) URL", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(MavenError::InvalidConfig {
                message: "timeout_secs must be greater than zero".into(),
            });
        }
        Ok(())
    }

    pub fn max_stale(&self) -> Duration {
        Duration::from_secs(self.max_stale_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL with any trailing slashes removed.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CentralConfig::default();
        assert_eq!(config.base_url, "https://search.maven.org");
        assert_eq!(config.max_stale(), Duration::from_secs(300));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("artsearch/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CentralConfig::from_json_str(r#"{"max_stale_secs": 60}"#).unwrap();
        assert_eq!(config.max_stale_secs, 60);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_value() {
        let config = CentralConfig::from_value(serde_json::json!({
            "base_url": "http://localhost:8080/",
            "timeout_secs": 5
        }))
        .unwrap();
        assert_eq!(config.base(), "http://localhost:8080");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_non_http_base() {
        let err = CentralConfig::from_json_str(r#"{"base_url": "search.maven.org"}"#).unwrap_err();
        assert!(matches!(err, MavenError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = CentralConfig::from_json_str(r#"{"timeout_secs": 0}"#).unwrap_err();
        assert!(matches!(err, MavenError::InvalidConfig { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = CentralConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, MavenError::Json(_)));
    }
}
