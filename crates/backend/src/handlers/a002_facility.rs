use axum::extract::State;
use axum::response::Response;

use super::passthrough;
use crate::routes::AppState;
use crate::shared::error::GatewayError;
use crate::shared::upstream::{UpstreamRequest, UpstreamService};

/// GET /api/facility
pub async fn list_all(State(state): State<AppState>) -> Result<Response, GatewayError> {
    let response = state
        .upstream
        .forward(UpstreamRequest::get(UpstreamService::Ops, "/facility"))
        .await?;
    Ok(passthrough(response))
}
