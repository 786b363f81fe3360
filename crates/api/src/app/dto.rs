use serde::Deserialize;

use storefront_catalog::{Money, PageRequest, ProductSearch};
use storefront_core::{DomainError, Rounding};

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /api/products`.
///
/// Everything arrives as text so malformed numbers produce our JSON error
/// body instead of the extractor's plain-text rejection. Empty values count
/// as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl SearchParams {
    pub fn into_search(self) -> Result<ProductSearch, DomainError> {
        Ok(ProductSearch {
            term: present(self.search),
            category: present(self.category),
            min_price: parse_price("minPrice", self.min_price, Rounding::Up)?,
            max_price: parse_price("maxPrice", self.max_price, Rounding::Down)?,
            page: PageRequest::new(
                parse_int("page", self.page)?,
                parse_int("pageSize", self.page_size)?,
            ),
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Bounds are inclusive, so sub-cent input rounds toward the inside of the
/// range: a lower bound up, an upper bound down.
fn parse_price(
    field: &str,
    raw: Option<String>,
    rounding: Rounding,
) -> Result<Option<Money>, DomainError> {
    present(raw)
        .map(|v| {
            Money::parse_rounded(&v, rounding)
                .map_err(|_| DomainError::validation(format!("{field} must be a non-negative amount, got {v:?}")))
        })
        .transpose()
}

fn parse_int(field: &str, raw: Option<String>) -> Result<Option<i64>, DomainError> {
    present(raw)
        .map(|v| {
            v.trim()
                .parse::<i64>()
                .map_err(|_| DomainError::validation(format!("{field} must be an integer, got {v:?}")))
        })
        .transpose()
}
