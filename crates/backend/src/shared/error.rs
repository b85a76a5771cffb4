use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::{GatewayErrorBody, UPSTREAM_UNREACHABLE_CODE};
use thiserror::Error;

/// Failures of the gateway itself; upstream HTTP errors are passed through
/// and never become a `GatewayError`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    #[error("failed to read upstream response: {0}")]
    ResponseBody(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let body = GatewayErrorBody {
            code: UPSTREAM_UNREACHABLE_CODE.to_string(),
            error: self.to_string(),
        };
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_unreachable_maps_to_bad_gateway() {
        let response = GatewayError::Unreachable("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GatewayErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "UPSTREAM_UNREACHABLE");
        assert!(body.error.contains("connection refused"));
    }
}
