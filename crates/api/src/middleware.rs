use std::time::Instant;

use axum::{
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::context::RequestContext;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Attach a [`RequestContext`], run the request inside a span, and log the outcome.
///
/// A well-formed incoming `x-request-id` is reused; otherwise a new one is
/// generated. The id is echoed on the response.
pub async fn request_context_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let ctx = extract_request_id(req.headers())
        .map(RequestContext::new)
        .unwrap_or_else(RequestContext::generate);
    req.extensions_mut().insert(ctx);

    let span = tracing::info_span!(
        "http.request",
        request_id = %ctx.request_id(),
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        let started = Instant::now();
        let mut res = next.run(req).await;
        let status = res.status();
        let latency_ms = started.elapsed().as_millis() as u64;

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), latency_ms, "request failed");
        } else if status.is_client_error() {
            tracing::info!(status = status.as_u16(), latency_ms, "request rejected");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "request completed");
        }

        if let Ok(value) = HeaderValue::from_str(&ctx.request_id().to_string()) {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        res
    }
    .instrument(span)
    .await
}

fn extract_request_id(headers: &HeaderMap) -> Option<Uuid> {
    let header = headers.get(REQUEST_ID_HEADER)?;
    let header = header.to_str().ok()?;
    Uuid::parse_str(header.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuses_well_formed_request_id() {
        let id = Uuid::now_v7();
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&id.to_string()).unwrap());
        assert_eq!(extract_request_id(&headers), Some(id));
    }

    #[test]
    fn ignores_missing_or_malformed_request_id() {
        assert_eq!(extract_request_id(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("not-a-uuid"));
        assert_eq!(extract_request_id(&headers), None);
    }
}
