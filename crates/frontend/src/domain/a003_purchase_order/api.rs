use contracts::domain::a003_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a003_purchase_order::query::PurchaseOrderQuery;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_purchase_orders(query: &PurchaseOrderQuery) -> Result<Vec<PurchaseOrder>, ApiError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::MalformedResponse(format!("Failed to encode query: {}", e)))?;
    log::debug!("fetching purchase orders: {}", qs);
    get_json(&format!("/api/purchaseOrder?{}", qs)).await
}
