pub mod a001_city;
pub mod a002_facility;
pub mod a003_purchase_order;
pub mod auth;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::shared::upstream::UpstreamResponse;

/// Pass an upstream answer through with its status and body unchanged.
pub(crate) fn passthrough(upstream: UpstreamResponse) -> Response {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .content_type
        .and_then(|v| HeaderValue::from_str(&v).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    (status, [(header::CONTENT_TYPE, content_type)], upstream.body).into_response()
}
