use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_core::{DomainError, ProductId};

use crate::app::{dto, errors, services::AppServices};
use crate::context::RequestContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(search_products))
        .route("/categories", get(list_categories))
        .route("/:id", get(get_product))
        .route("/:id/related", get(get_related_products))
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let criteria = match params.into_search() {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog().search(&criteria) {
        Ok(page) => {
            tracing::debug!(
                request_id = %ctx.request_id(),
                total_count = page.total_count,
                returned = page.products.len(),
                "catalog search"
            );
            (StatusCode::OK, Json(page)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };

    match services.catalog().get_by_id(product_id) {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}

pub async fn get_related_products(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };

    let related = services.catalog().get_related(product_id);
    (StatusCode::OK, Json(related)).into_response()
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.catalog().list_categories())).into_response()
}
