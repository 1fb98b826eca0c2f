use crate::result::SearchResult;
use crate::types::{FieldName, QueryField, VersionRecord};
use async_trait::async_trait;

/// Field-based search against a remote artifact repository.
///
/// Implementors translate query fields into the repository's own query
/// language, fetch and decode the response, and return normalized records.
///
/// `find` never fails: transport errors and unexpected responses degrade to
/// an empty result so callers need no error handling of their own.
///
/// # Examples
///
/// ```
/// use artsearch_core::{GenericFindQuery, QueryField, SearchResult, VersionRecord};
/// use async_trait::async_trait;
///
/// struct Offline;
///
/// #[async_trait]
/// impl GenericFindQuery for Offline {
///     async fn find(&self, _fields: &[QueryField]) -> SearchResult<VersionRecord> {
///         SearchResult::empty()
///     }
/// }
/// ```
#[async_trait]
pub trait GenericFindQuery: Send + Sync {
    /// Runs a search for the given fields.
    ///
    /// Returns an empty, complete result when no field is recognized.
    async fn find(&self, fields: &[QueryField]) -> SearchResult<VersionRecord>;
}

/// Convenience lookups built on top of [`GenericFindQuery::find`].
///
/// Implemented for every `GenericFindQuery`.
#[async_trait]
pub trait BaseQueries: GenericFindQuery {
    /// Records matching the given coordinates. Missing or empty arguments
    /// are left out of the query.
    async fn get_records(
        &self,
        group_id: Option<&str>,
        artifact_id: Option<&str>,
        version: Option<&str>,
    ) -> SearchResult<VersionRecord> {
        let fields: Vec<QueryField> = [
            (FieldName::GroupId, group_id),
            (FieldName::ArtifactId, artifact_id),
            (FieldName::Version, version),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| QueryField::new(field, v))
        })
        .collect();

        self.find(&fields).await
    }

    /// All records for one artifact.
    async fn get_versions(&self, group_id: &str, artifact_id: &str) -> SearchResult<VersionRecord> {
        self.get_records(Some(group_id), Some(artifact_id), None)
            .await
    }

    /// Distinct artifact ids published under `group_id`, in first-seen order.
    async fn get_artifacts(&self, group_id: &str) -> SearchResult<String> {
        let records = self.get_records(Some(group_id), None, None).await;
        distinct(records.map(|r| r.artifact_id))
    }

    /// Distinct "group:artifact:version" strings for the given packaging.
    async fn get_gavs_for_packaging(&self, packaging: &str) -> SearchResult<String> {
        let fields = [QueryField::new(FieldName::Packaging, packaging)];
        let records = self.find(&fields).await;
        distinct(records.map(|r| r.gav()))
    }
}

impl<T: GenericFindQuery + ?Sized> BaseQueries for T {}

fn distinct(result: SearchResult<String>) -> SearchResult<String> {
    let partial = result.is_partial();
    let mut seen = std::collections::HashSet::new();
    let unique: Vec<String> = result
        .into_results()
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect();

    if partial {
        SearchResult::partial(unique)
    } else {
        SearchResult::complete(unique)
    }
}
