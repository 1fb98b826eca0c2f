//! Decoding of Solr search responses.
//!
//! The search API's JSON layout is not versioned, so decoding never fails:
//! every navigation step is checked and any surprise yields no documents.

use crate::normalizer::normalize_document;
use artsearch_core::VersionRecord;
use serde_json::{Map, Value};

/// Extracts the `response.docs` objects from a raw response body.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD before parsing.
/// Returns an empty list if the body is not JSON, the top level is not an
/// object, `response` is not an object, or `docs` is not an array. Array
/// elements that are not objects are skipped.
pub fn decode_documents(body: &[u8]) -> Vec<Map<String, Value>> {
    let text = String::from_utf8_lossy(body);
    let Ok(Value::Object(mut root)) = serde_json::from_str::<Value>(&text) else {
        return Vec::new();
    };
    let Some(Value::Object(mut response)) = root.remove("response") else {
        return Vec::new();
    };
    let Some(Value::Array(docs)) = response.remove("docs") else {
        return Vec::new();
    };

    docs.into_iter()
        .filter_map(|doc| match doc {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

/// Decodes a response body straight into version records.
pub fn decode_records(body: &[u8]) -> Vec<VersionRecord> {
    decode_documents(body)
        .iter()
        .flat_map(normalize_document)
        .collect()
}
