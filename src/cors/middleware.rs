use super::origins::AllowedOrigins;
use crate::types::error::ApiError;
use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Cross-origin guard
///
/// Requests that carry an `Origin` header outside the allow-list are rejected
/// with 403 before any route (or the CORS preflight responder) sees them.
/// Requests without an `Origin` header are not browser cross-origin calls and
/// pass through untouched.
///
/// Note: the allow-list must be captured in a closure when creating the layer
pub async fn origin_guard(allowed: AllowedOrigins, request: Request, next: Next) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN)
        && !allowed.contains(origin)
    {
        tracing::warn!("Rejected request from disallowed origin: {:?}", origin);
        return ApiError::OriginNotAllowed.into_response();
    }

    next.run(request).await
}
