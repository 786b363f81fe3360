//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: shared, read-only state handed to handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: query-string DTOs and mapping into domain criteria
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use storefront_catalog::CatalogQueryEngine;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(catalog: CatalogQueryEngine) -> Router {
    let services = Arc::new(services::AppServices::new(catalog));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_context_middleware))
                .layer(Extension(services)),
        )
}
