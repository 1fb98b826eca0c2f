//! Domain types shared by all connectors.

use serde::Serialize;
use std::fmt;

/// Kind of a query field.
///
/// Field names outside the known set are kept as [`FieldName::Other`] so a
/// caller can pass them through; connectors ignore fields they do not
/// recognize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    GroupId,
    ArtifactId,
    Version,
    Packaging,
    Other(String),
}

impl FieldName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::GroupId => "groupId",
            Self::ArtifactId => "artifactId",
            Self::Version => "version",
            Self::Packaging => "packaging",
            Self::Other(name) => name,
        }
    }
}

impl std::str::FromStr for FieldName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "name" => Self::Name,
            "groupId" => Self::GroupId,
            "artifactId" => Self::ArtifactId,
            "version" => Self::Version,
            "packaging" => Self::Packaging,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single (field, value) search criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryField {
    field: FieldName,
    value: String,
}

impl QueryField {
    pub fn new(field: FieldName, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn field(&self) -> &FieldName {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One artifact file variant of a published version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Label of the repository that produced the record, e.g. "central".
    pub repository: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// File extension of this variant ("jar", "pom", "tar.gz", ...).
    #[serde(rename = "type")]
    pub extension: String,
    pub packaging: String,
    /// Identifier assigned by the remote repository.
    pub id: String,
    /// Local download path. Always `None` for remote search results.
    pub local_path: Option<String>,
    pub classifier: Option<String>,
}

impl VersionRecord {
    /// "{groupId}:{artifactId}:{version}"
    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Description of a configured repository, as handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositoryInfo {
    pub id: String,
    pub repository_url: Option<String>,
    pub local: bool,
    pub mirror: bool,
}
