use std::sync::Arc;

use storefront_catalog::CatalogQueryEngine;

/// State shared by every handler.
///
/// The catalog is built before the router and never mutated afterwards, so
/// handlers only ever see `&CatalogQueryEngine`.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: Arc<CatalogQueryEngine>,
}

impl AppServices {
    pub fn new(catalog: CatalogQueryEngine) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &CatalogQueryEngine {
        &self.catalog
    }
}
