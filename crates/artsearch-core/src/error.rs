//! Errors shared by transports and connectors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("HTTP request failed for '{url}': {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_display() {
        let err = SearchError::InvalidUrl {
            url: "not a url".into(),
            message: "relative URL without a base".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid request URL 'not a url': relative URL without a base"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: SearchError = json_err.into();
        assert!(matches!(err, SearchError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::from(std::io::ErrorKind::TimedOut);
        let err: SearchError = io_err.into();
        assert!(matches!(err, SearchError::Io(_)));
    }
}
