/// Outcome of a repository query.
///
/// `partial` marks a result that is known to omit matches (for example when
/// only the first page of a larger hit list was read).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<T> {
    results: Vec<T>,
    partial: bool,
}

impl<T> SearchResult<T> {
    /// A complete result holding `results`.
    pub fn complete(results: Vec<T>) -> Self {
        Self {
            results,
            partial: false,
        }
    }

    /// A result that does not cover every match.
    pub fn partial(results: Vec<T>) -> Self {
        Self {
            results,
            partial: true,
        }
    }

    /// A complete result with no entries.
    pub fn empty() -> Self {
        Self::complete(Vec::new())
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    pub fn returned_count(&self) -> usize {
        self.results.len()
    }

    /// Transforms every entry, keeping the `partial` flag.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchResult<U> {
        SearchResult {
            results: self.results.into_iter().map(f).collect(),
            partial: self.partial,
        }
    }
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}
