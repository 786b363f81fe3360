//! Read-only queries over the catalog.

use std::collections::{BTreeSet, HashSet};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::ProductRecord;
use crate::query::{ProductSearch, SearchResult};
use crate::seed;

/// Maximum number of records returned by [`CatalogQueryEngine::get_related`].
pub const RELATED_LIMIT: usize = 4;

/// Owns the catalog and answers queries over it.
///
/// The record list is fixed at construction. Every query takes `&self`, so the
/// engine can be shared across threads behind an `Arc` without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQueryEngine {
    products: Vec<ProductRecord>,
}

impl CatalogQueryEngine {
    /// Build an engine over `products`, keeping their order.
    ///
    /// Fails if two records share an identifier.
    pub fn new(products: Vec<ProductRecord>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products })
    }

    /// Engine over the built-in catalog.
    pub fn builtin() -> DomainResult<Self> {
        Self::new(seed::builtin_products()?)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All records in catalog order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Filter, sort by name, then paginate.
    ///
    /// Returns `InvalidArgument` for a non-positive page or page size.
    pub fn search(&self, criteria: &ProductSearch) -> DomainResult<SearchResult<'_>> {
        let (offset, limit) = criteria.page.window()?;
        let needle = criteria.needle();

        let mut matched: Vec<&ProductRecord> = self
            .products
            .iter()
            .filter(|p| criteria.matches(p, needle.as_deref()))
            .collect();

        let total_count = matched.len();
        let total_pages = total_count.div_ceil(limit);

        // Ordinal comparison; `sort_by` is stable so equal names keep catalog order.
        matched.sort_by(|a, b| a.name().cmp(b.name()));

        let products = matched.into_iter().skip(offset).take(limit).collect();

        Ok(SearchResult {
            products,
            total_count,
            current_page: criteria.page.page,
            total_pages,
        })
    }

    /// Look up a record by id. `None` means no such record.
    pub fn get_by_id(&self, id: ProductId) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Up to [`RELATED_LIMIT`] other records in the same category, in catalog
    /// order. Unknown ids yield an empty list.
    pub fn get_related(&self, id: ProductId) -> Vec<&ProductRecord> {
        let Some(product) = self.get_by_id(id) else {
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|p| p.id() != id && p.in_category(product.category()))
            .take(RELATED_LIMIT)
            .collect()
    }

    /// Distinct category names, ascending.
    pub fn list_categories(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(ProductRecord::category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
