//! Search criteria and paged results.

use serde::Serialize;

use storefront_core::{DomainError, DomainResult, Money};

use crate::product::ProductRecord;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// 1-based page selection.
///
/// Fields are signed so out-of-range input reaches [`PageRequest::window`]
/// and is rejected there rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Validated `(offset, limit)` for this page.
    ///
    /// Non-positive values are rejected with `InvalidArgument`; nothing is
    /// clamped.
    pub fn window(&self) -> DomainResult<(usize, usize)> {
        if self.page < 1 {
            return Err(DomainError::invalid_argument(format!(
                "page must be at least 1, got {}",
                self.page
            )));
        }
        if self.page_size < 1 {
            return Err(DomainError::invalid_argument(format!(
                "pageSize must be at least 1, got {}",
                self.page_size
            )));
        }

        // Both are positive here; oversized products saturate and land past the end.
        let limit = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        let offset = usize::try_from(self.page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(limit);
        Ok((offset, limit))
    }
}

/// Filter criteria for a catalog search. All filters are conjunctive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearch {
    /// Case-insensitive substring of name or description.
    pub term: Option<String>,
    /// Case-insensitive exact category.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    pub max_price: Option<Money>,
    pub page: PageRequest,
}

impl ProductSearch {
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price_between(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn page(mut self, page: i64, page_size: i64) -> Self {
        self.page = PageRequest { page, page_size };
        self
    }

    pub(crate) fn matches(&self, product: &ProductRecord, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !product.mentions(needle) {
                return false;
            }
        }

        if let Some(category) = non_empty(self.category.as_deref()) {
            if !product.in_category(category) {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if product.price() < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if product.price() > max {
                return false;
            }
        }

        true
    }

    /// Lowercased search term, if one was given.
    pub(crate) fn needle(&self) -> Option<String> {
        non_empty(self.term.as_deref()).map(str::to_lowercase)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    /// Records on this page, ordered by name.
    pub products: Vec<&'a ProductRecord>,
    /// Number of records matching the filters (across all pages).
    pub total_count: usize,
    /// The requested page number (echoed even when past the end).
    pub current_page: i64,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let page = PageRequest::new(None, None);
        assert_eq!(page, PageRequest { page: 1, page_size: 10 });
        assert_eq!(page.window().unwrap(), (0, 10));
    }

    #[test]
    fn window_skips_previous_pages() {
        let page = PageRequest { page: 3, page_size: 4 };
        assert_eq!(page.window().unwrap(), (8, 4));
    }

    #[test]
    fn window_rejects_non_positive_values() {
        for (page, page_size) in [(0, 10), (-1, 10), (1, 0), (1, -5)] {
            let err = PageRequest { page, page_size }.window().unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidArgument(_)),
                "expected InvalidArgument for page={page} pageSize={page_size}"
            );
        }
    }

    #[test]
    fn window_accepts_large_page_sizes() {
        assert_eq!(PageRequest { page: 1, page_size: 500 }.window().unwrap(), (0, 500));
        let (offset, limit) = PageRequest { page: 4, page_size: i64::MAX }.window().unwrap();
        assert_eq!(limit as u64, i64::MAX as u64);
        assert_eq!(offset, usize::MAX);
    }

    #[test]
    fn window_saturates_for_huge_page_numbers() {
        let (offset, limit) = PageRequest { page: i64::MAX, page_size: 50 }.window().unwrap();
        assert_eq!(limit, 50);
        assert!(offset > 1_000_000);
    }

    #[test]
    fn empty_term_is_treated_as_absent() {
        assert_eq!(ProductSearch::default().term("").needle(), None);
        assert_eq!(ProductSearch::default().term("AiR").needle().as_deref(), Some("air"));
    }
}
