use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

use super::passthrough;
use crate::routes::AppState;
use crate::shared::error::GatewayError;
use crate::shared::upstream::{UpstreamRequest, UpstreamService};

/// POST /api/user/login
pub async fn login(State(state): State<AppState>, body: Bytes) -> Result<Response, GatewayError> {
    tracing::info!("forwarding login request");
    let response = state
        .upstream
        .forward(UpstreamRequest::post(UpstreamService::Auth, "/user/login", body))
        .await?;
    tracing::info!("login answered {}", response.status);
    Ok(passthrough(response))
}
