//! Product catalog queries.
//!
//! This crate holds the in-memory catalog and the read-only queries over it,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod engine;
pub mod image;
pub mod product;
pub mod query;
pub mod seed;

pub use engine::{CatalogQueryEngine, RELATED_LIMIT};
pub use product::{NewProduct, ProductRecord};
pub use query::{DEFAULT_PAGE_SIZE, PageRequest, ProductSearch, SearchResult};

pub use storefront_core::{Money, ProductId};
