//! Maven Central search connector.

use crate::config::CentralConfig;
use crate::decoder::decode_records;
use crate::error::Result;
use crate::query::{SearchQuery, build_query};
use artsearch_core::{
    GenericFindQuery, HttpCache, QueryField, RepositoryInfo, SearchResult, SearchTransport,
    VersionRecord,
};
use std::sync::Arc;

const CENTRAL_REPOSITORY_ID: &str = "central";
const CENTRAL_REPOSITORY_HOST: &str = "repo.maven.apache.org";

/// Returns true for the canonical, remote, non-mirrored Maven Central repository.
pub fn is_central(repo: &RepositoryInfo) -> bool {
    repo.id == CENTRAL_REPOSITORY_ID
        && !repo.local
        && !repo.mirror
        && repo
            .repository_url
            .as_deref()
            .is_some_and(|url| url.contains(CENTRAL_REPOSITORY_HOST))
}

/// Field search against the Maven Central Solr API.
///
/// Each [`find`](GenericFindQuery::find) call issues at most one request and
/// never fails: transport errors are logged and produce an empty result.
#[derive(Clone)]
pub struct MavenCentralSearch {
    transport: Arc<dyn SearchTransport>,
    config: CentralConfig,
}

impl MavenCentralSearch {
    pub fn new(transport: Arc<dyn SearchTransport>) -> Self {
        Self::with_config(transport, CentralConfig::default())
    }

    pub fn with_config(transport: Arc<dyn SearchTransport>, config: CentralConfig) -> Self {
        Self { transport, config }
    }

    /// Builds a connector with its own [`HttpCache`] configured from `config`.
    pub fn from_config(config: CentralConfig) -> Result<Self> {
        config.validate()?;
        let cache = HttpCache::with_settings(config.timeout(), &config.user_agent)?;
        Ok(Self::with_config(Arc::new(cache), config))
    }

    pub fn config(&self) -> &CentralConfig {
        &self.config
    }

    pub fn handles_repository(&self, repo: &RepositoryInfo) -> bool {
        is_central(repo)
    }

    async fn query_central(&self, query: &SearchQuery) -> Vec<VersionRecord> {
        let url = query.url(self.config.base());
        tracing::debug!(%url, "querying Maven Central");

        match self.transport.get(&url, self.config.max_stale()).await {
            Ok(body) => {
                let records = decode_records(&body);
                tracing::debug!(%url, count = records.len(), "parsed Maven Central results");
                records
            }
            Err(e) => {
                tracing::error!(%url, error = %e, "Maven Central search failed");
                Vec::new()
            }
        }
    }
}

#[async_trait::async_trait]
impl GenericFindQuery for MavenCentralSearch {
    async fn find(&self, fields: &[QueryField]) -> SearchResult<VersionRecord> {
        let plan = build_query(fields);

        if !plan.ignored.is_empty() {
            let ignored: Vec<&str> = plan.ignored.iter().map(|f| f.as_str()).collect();
            tracing::warn!(
                ?ignored,
                "Maven packaging search will ignore group/artifact/version fields"
            );
        }

        let Some(query) = plan.query else {
            tracing::debug!("no searchable fields, skipping Maven Central");
            return SearchResult::empty();
        };

        SearchResult::complete(self.query_central(&query).await)
    }
}
