use axum::extract::{RawQuery, State};
use axum::response::Response;

use super::passthrough;
use crate::routes::AppState;
use crate::shared::error::GatewayError;
use crate::shared::upstream::{UpstreamRequest, UpstreamService};

/// GET /api/purchaseOrder
///
/// The query string (cityId, facilityId, deliveryDate, offset, limit,
/// purchaseOrderType) is forwarded verbatim.
pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, GatewayError> {
    tracing::debug!("purchase orders query: {:?}", query);
    let response = state
        .upstream
        .forward(UpstreamRequest::get(UpstreamService::Ops, "/purchaseOrder").with_query(query))
        .await?;
    Ok(passthrough(response))
}
