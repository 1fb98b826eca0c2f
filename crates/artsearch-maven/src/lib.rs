//! Maven Central search connector.
//!
//! Turns query fields into Solr queries against `search.maven.org`, fetches
//! the response through a [`SearchTransport`](artsearch_core::SearchTransport),
//! and normalizes each result document into one record per published file
//! variant.

pub mod config;
pub mod decoder;
pub mod error;
pub mod normalizer;
pub mod query;
pub mod registry;

pub use config::{CentralConfig, DEFAULT_BASE_URL};
pub use decoder::{decode_documents, decode_records};
pub use error::{MavenError, Result};
pub use normalizer::{REPOSITORY_ID, Suffix, normalize_document, parse_suffix};
pub use query::{QueryPlan, SEARCH_ROWS, SearchCore, SearchQuery, build_query};
pub use registry::{MavenCentralSearch, is_central};
