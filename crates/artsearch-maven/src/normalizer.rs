//! Conversion of Solr result documents into version records.
//!
//! A GAV document lists the files published for a version in its `ec`
//! array as suffixes such as `"-sources.jar"`, `".jar"` or `".pom"`. Each
//! suffix other than javadoc/sources becomes its own record. Documents
//! without a usable suffix still yield a single record guessed to be a jar.

use artsearch_core::VersionRecord;
use serde_json::{Map, Value};

/// Repository label carried by every record from this connector.
pub const REPOSITORY_ID: &str = "central";

const FALLBACK_EXTENSION: &str = "jar";

/// Classifiers that never produce a separate record.
const SKIPPED_CLASSIFIERS: &[&str] = &["javadoc", "sources"];

/// A parsed `ec` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suffix<'a> {
    pub classifier: Option<&'a str>,
    pub extension: &'a str,
}

/// Parses an `ec` entry of the form `[-classifier].extension`.
///
/// The classifier is the non-empty run of characters between the leading
/// dash and the first dot. The extension is everything after that dot and
/// may itself contain dots (`"-bin.tar.gz"` gives classifier `bin`,
/// extension `tar.gz`). Returns `None` for anything else.
pub fn parse_suffix(s: &str) -> Option<Suffix<'_>> {
    let (classifier, rest) = match s.strip_prefix('-') {
        Some(tail) => {
            let dot = tail.find('.')?;
            if dot == 0 {
                return None;
            }
            (Some(&tail[..dot]), &tail[dot..])
        }
        None => (None, s),
    };

    let extension = rest.strip_prefix('.')?;
    if extension.contains(is_line_terminator) {
        return None;
    }

    Some(Suffix {
        classifier,
        extension,
    })
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Builds the version records for one result document.
///
/// Always returns at least one record.
pub fn normalize_document(doc: &Map<String, Value>) -> Vec<VersionRecord> {
    let group_id = coerce(doc.get("g"));
    let artifact_id = coerce(doc.get("a"));
    let version = coerce(
        doc.get("latestVersion")
            .filter(|v| !v.is_null())
            .or_else(|| doc.get("v")),
    );
    let packaging = coerce(doc.get("p"));
    let id = coerce(doc.get("id"));

    let record = |extension: &str, classifier: Option<&str>| VersionRecord {
        repository: REPOSITORY_ID.to_string(),
        group_id: group_id.clone(),
        artifact_id: artifact_id.clone(),
        version: version.clone(),
        extension: extension.to_string(),
        packaging: packaging.clone(),
        id: id.clone(),
        local_path: None,
        classifier: classifier.map(str::to_string),
    };

    let mut records: Vec<VersionRecord> = doc
        .get("ec")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|entry| {
            let text = coerce(Some(entry));
            let suffix = parse_suffix(&text)?;
            if suffix
                .classifier
                .is_some_and(|c| SKIPPED_CLASSIFIERS.contains(&c))
            {
                return None;
            }
            Some(record(suffix.extension, suffix.classifier))
        })
        .collect();

    if records.is_empty() {
        records.push(record(FALLBACK_EXTENSION, None));
    }

    records
}

/// Renders a JSON value as plain text.
///
/// Strings lose their quotes, other values use their JSON text, and a
/// missing or null value becomes the literal `"null"`.
fn coerce(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    fn extensions(records: &[VersionRecord]) -> Vec<(&str, Option<&str>)> {
        records
            .iter()
            .map(|r| (r.extension.as_str(), r.classifier.as_deref()))
            .collect()
    }

    #[test]
    fn test_parse_plain_extension() {
        assert_eq!(
            parse_suffix(".jar"),
            Some(Suffix {
                classifier: None,
                extension: "jar"
            })
        );
    }

    #[test]
    fn test_parse_classifier() {
        assert_eq!(
            parse_suffix("-sources.jar"),
            Some(Suffix {
                classifier: Some("sources"),
                extension: "jar"
            })
        );
        assert_eq!(
            parse_suffix("-linux-x86_64.so"),
            Some(Suffix {
                classifier: Some("linux-x86_64"),
                extension: "so"
            })
        );
    }

    #[test]
    fn test_parse_multi_dot_extension() {
        assert_eq!(
            parse_suffix("-bin.tar.gz"),
            Some(Suffix {
                classifier: Some("bin"),
                extension: "tar.gz"
            })
        );
        assert_eq!(
            parse_suffix(".tar.gz"),
            Some(Suffix {
                classifier: None,
                extension: "tar.gz"
            })
        );
    }

    #[test]
    fn test_parse_empty_extension() {
        assert_eq!(
            parse_suffix("."),
            Some(Suffix {
                classifier: None,
                extension: ""
            })
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_suffix(""), None);
        assert_eq!(parse_suffix("jar"), None);
        assert_eq!(parse_suffix("x.jar"), None);
        assert_eq!(parse_suffix("-.jar"), None);
        assert_eq!(parse_suffix("-sources"), None);
        assert_eq!(parse_suffix("-"), None);
        assert_eq!(parse_suffix(".ja\nr"), None);
    }

    #[test]
    fn test_standard_document() {
        let records = normalize_document(&doc(json!({
            "g": "com.g",
            "a": "art",
            "v": "1.0",
            "p": "jar",
            "ec": ["-sources.jar", "-javadoc.jar", ".jar", ".pom"],
            "id": "com.g:art:1.0"
        })));

        assert_eq!(extensions(&records), vec![("jar", None), ("pom", None)]);
        for r in &records {
            assert_eq!(r.repository, "central");
            assert_eq!(r.group_id, "com.g");
            assert_eq!(r.artifact_id, "art");
            assert_eq!(r.version, "1.0");
            assert_eq!(r.packaging, "jar");
            assert_eq!(r.id, "com.g:art:1.0");
            assert!(r.local_path.is_none());
        }
    }

    #[test]
    fn test_other_classifiers_kept() {
        let records = normalize_document(&doc(json!({
            "g": "io.netty",
            "a": "netty-transport-native-epoll",
            "v": "4.1.100.Final",
            "p": "jar",
            "ec": ["-linux-x86_64.jar", "-tests.jar", ".jar"],
            "id": "io.netty:netty-transport-native-epoll:4.1.100.Final"
        })));

        assert_eq!(
            extensions(&records),
            vec![
                ("jar", Some("linux-x86_64")),
                ("jar", Some("tests")),
                ("jar", None)
            ]
        );
    }

    #[test]
    fn test_missing_ec_falls_back_to_jar() {
        let records = normalize_document(&doc(json!({
            "g": "com.g", "a": "art", "v": "1.0", "p": "jar", "id": "x"
        })));
        assert_eq!(extensions(&records), vec![("jar", None)]);
    }

    #[test]
    fn test_empty_ec_falls_back_to_jar() {
        let records = normalize_document(&doc(json!({"g": "g", "a": "a", "ec": []})));
        assert_eq!(extensions(&records), vec![("jar", None)]);
    }

    #[test]
    fn test_ec_not_array_falls_back_to_jar() {
        let records = normalize_document(&doc(json!({"g": "g", "a": "a", "ec": ".pom"})));
        assert_eq!(extensions(&records), vec![("jar", None)]);
    }

    #[test]
    fn test_only_docs_and_sources_falls_back_to_jar() {
        let records = normalize_document(&doc(json!({
            "g": "g", "a": "a", "ec": ["-sources.jar", "-javadoc.jar", "garbage"]
        })));
        assert_eq!(extensions(&records), vec![("jar", None)]);
    }

    #[test]
    fn test_latest_version_preferred() {
        let records = normalize_document(&doc(json!({
            "g": "g", "a": "a", "v": "1.0", "latestVersion": "2.0"
        })));
        assert_eq!(records[0].version, "2.0");
    }

    #[test]
    fn test_null_latest_version_uses_v() {
        let records = normalize_document(&doc(json!({
            "g": "g", "a": "a", "v": "1.0", "latestVersion": null
        })));
        assert_eq!(records[0].version, "1.0");
    }

    #[test]
    fn test_missing_values_become_null_text() {
        let records = normalize_document(&Map::new());
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.group_id, "null");
        assert_eq!(r.artifact_id, "null");
        assert_eq!(r.version, "null");
        assert_eq!(r.packaging, "null");
        assert_eq!(r.id, "null");
        assert_eq!(r.extension, "jar");
        assert!(r.classifier.is_none());
    }

    #[test]
    fn test_non_string_values_use_json_text() {
        let records = normalize_document(&doc(json!({
            "g": "g", "a": "a", "v": 7, "p": true, "ec": [1.5, null]
        })));
        assert_eq!(records[0].version, "7");
        assert_eq!(records[0].packaging, "true");
        // "1.5" and "null" are not suffixes, so only the fallback remains.
        assert_eq!(extensions(&records), vec![("jar", None)]);
    }
}
