use crate::pagination::Pagination;

/// Query definition used to list catalog lookup records (brands, colors, sizes, categories).
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Optional case-insensitive substring search applied to names.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ListQuery {
    /// Construct a query that targets every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
