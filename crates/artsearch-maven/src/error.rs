//! Errors specific to the Maven Central connector.
//!
//! Searches themselves never fail; these errors come from building a
//! connector (configuration, HTTP client setup).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MavenError {
    #[error("Invalid connector configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Maven Central transport error: {0}")]
    Transport(String),

    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MavenError>;

impl From<artsearch_core::SearchError> for MavenError {
    fn from(err: artsearch_core::SearchError) -> Self {
        match err {
            artsearch_core::SearchError::InvalidUrl { url, message } => Self::InvalidConfig {
                message: format!("invalid URL '{url}': {message}"),
            },
            artsearch_core::SearchError::Json(e) => Self::Json(e),
            artsearch_core::SearchError::Io(e) => Self::Io(e),
            other => Self::Transport(other.to_string()),
        }
    }
}
