//! Core abstractions for artsearch.
//!
//! This crate holds the pieces shared by every repository connector:
//! the HTTP transport contract and its cached implementation, the error
//! type, query fields, normalized version records, and the query traits
//! connectors implement.

pub mod cache;
pub mod error;
pub mod registry;
pub mod result;
pub mod transport;
pub mod types;

pub use cache::{DEFAULT_TIMEOUT, HttpCache};
pub use error::{Result, SearchError};
pub use registry::{BaseQueries, GenericFindQuery};
pub use result::SearchResult;
pub use transport::SearchTransport;
pub use types::{FieldName, QueryField, RepositoryInfo, VersionRecord};
