use serde::Serialize;

/// Number of items shown per page when the caller does not specify one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Page number (1-based) and page size requested from a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows to skip for this page. Saturates for absurd page numbers.
    pub fn offset(&self) -> i64 {
        let skipped = (self.page.max(1) - 1).saturating_mul(self.per_page);
        i64::try_from(skipped).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }
}

/// A single page of items together with the page bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_items: usize, per_page: usize) -> Self {
        Self {
            items,
            page,
            total_pages: total_items.div_ceil(per_page.max(1)),
            total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_treats_page_zero_as_first_page() {
        let pagination = Pagination {
            page: 0,
            per_page: 10,
        };
        assert_eq!(pagination.offset(), 0);

        let pagination = Pagination {
            page: 3,
            per_page: 10,
        };
        assert_eq!(pagination.offset(), 20);
    }

    #[test]
    fn offset_saturates_on_huge_page_numbers() {
        let pagination = Pagination {
            page: usize::MAX,
            per_page: 20,
        };
        assert_eq!(pagination.offset(), i64::MAX);
        assert_eq!(pagination.limit(), 20);
    }

    #[test]
    fn paginated_rounds_total_pages_up() {
        let page = Paginated::new(vec![1, 2], 1, 41, 20);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 41);
    }
}
