//! Translation of query fields into Maven Central Solr queries.

use artsearch_core::{FieldName, QueryField};

/// Number of rows requested per search. Only the first page is read.
pub const SEARCH_ROWS: u32 = 500;

const SEARCH_PATH: &str = "/solrsearch/select";
const QUOTE: &str = "%22";
const AND: &str = "%20AND%20";

/// Solr core a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCore {
    /// Full-text artifact search (one document per artifact).
    Default,
    /// Structured search with one document per group/artifact/version.
    Gav,
}

/// A query ready to be sent to the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Already URL-encoded value of the `q` parameter.
    pub query: String,
    pub core: SearchCore,
    pub rows: u32,
}

impl SearchQuery {
    fn new(query: String, core: SearchCore) -> Self {
        Self {
            query,
            core,
            rows: SEARCH_ROWS,
        }
    }

    /// Full request URL against `base` (scheme and host, no trailing slash).
    pub fn url(&self, base: &str) -> String {
        let core = match self.core {
            SearchCore::Default => "",
            SearchCore::Gav => "&core=gav",
        };
        format!(
            "{base}{SEARCH_PATH}?rows={rows}&wt=json{core}&q={q}",
            rows = self.rows,
            q = self.query,
        )
    }
}

/// Outcome of [`build_query`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPlan {
    /// `None` when no field is recognized; the search is then skipped.
    pub query: Option<SearchQuery>,
    /// Coordinate fields dropped because a packaging query took precedence.
    pub ignored: Vec<FieldName>,
}

#[derive(Default)]
struct Selected<'a> {
    name: Option<&'a str>,
    group: Option<&'a str>,
    artifact: Option<&'a str>,
    version: Option<&'a str>,
    packaging: Option<&'a str>,
}

impl<'a> Selected<'a> {
    // A repeated field kind keeps its last value.
    fn from_fields(fields: &'a [QueryField]) -> Self {
        let mut selected = Self::default();
        for field in fields {
            let value = Some(field.value());
            match field.field() {
                FieldName::Name => selected.name = value,
                FieldName::GroupId => selected.group = value,
                FieldName::ArtifactId => selected.artifact = value,
                FieldName::Version => selected.version = value,
                FieldName::Packaging => selected.packaging = value,
                FieldName::Other(_) => {}
            }
        }
        selected
    }

    fn coordinates(&self) -> [(FieldName, &'static str, Option<&'a str>); 3] {
        [
            (FieldName::GroupId, "g", self.group),
            (FieldName::ArtifactId, "a", self.artifact),
            (FieldName::Version, "v", self.version),
        ]
    }
}

/// Builds the Solr query for a set of fields.
///
/// Precedence, first match wins:
/// 1. `name`: free-text query on the default core, other fields ignored.
/// 2. `packaging`: `p:"..."` on the GAV core; coordinate fields are ignored
///    and listed in [`QueryPlan::ignored`].
/// 3. group/artifact/version: `g:"..." AND a:"..." AND v:"..."` on the GAV
///    core, present fields only, always in that order.
/// 4. Nothing recognized: no query.
pub fn build_query(fields: &[QueryField]) -> QueryPlan {
    let selected = Selected::from_fields(fields);

    if let Some(name) = selected.name {
        return QueryPlan {
            query: Some(SearchQuery::new(encode(name), SearchCore::Default)),
            ignored: Vec::new(),
        };
    }

    if let Some(packaging) = selected.packaging {
        let ignored = selected
            .coordinates()
            .into_iter()
            .filter(|(_, _, value)| value.is_some())
            .map(|(field, _, _)| field)
            .collect();
        return QueryPlan {
            query: Some(SearchQuery::new(clause("p", packaging), SearchCore::Gav)),
            ignored,
        };
    }

    let clauses: Vec<String> = selected
        .coordinates()
        .into_iter()
        .filter_map(|(_, code, value)| value.map(|v| clause(code, v)))
        .collect();

    if clauses.is_empty() {
        return QueryPlan::default();
    }

    QueryPlan {
        query: Some(SearchQuery::new(clauses.join(AND), SearchCore::Gav)),
        ignored: Vec::new(),
    }
}

fn clause(code: &str, value: &str) -> String {
    format!("{code}:{QUOTE}{}{QUOTE}", encode(value))
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
