use serde::{Deserialize, Serialize};

use crate::domain::a001_city::aggregate::{resolve_city_id, City};
use crate::domain::a002_facility::aggregate::{resolve_facility_id, Facility};
use crate::shared::filters::FilterSelection;
use crate::shared::format::date_part;

/// Rows requested per fetch; the table paginates client-side.
pub const FETCH_LIMIT: u32 = 200;

/// Query string of `GET /purchaseOrder`. Unresolved filters are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderQuery {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub city_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub facility_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub delivery_date: Option<String>,
    pub offset: u32,
    pub limit: u32,
    pub purchase_order_type: u8,
}

impl PurchaseOrderQuery {
    /// Resolve the filter names against the current reference lists.
    pub fn resolve(filters: &FilterSelection, cities: &[City], facilities: &[Facility]) -> Self {
        Self {
            city_id: resolve_city_id(cities, &filters.city),
            facility_id: resolve_facility_id(facilities, &filters.city, &filters.facility),
            delivery_date: date_part(&filters.date),
            offset: 0,
            limit: FETCH_LIMIT,
            purchase_order_type: filters.order_type.purchase_order_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cascade::fixtures::{city, facility};
    use crate::shared::filters::OrderType;

    #[test]
    fn test_resolve_full() {
        let cities = vec![city(1, "Chennai"), city(2, "Bengaluru")];
        let facilities = vec![facility(10, "B2C_Chennai_FK_FC", "Chennai", true)];
        let filters = FilterSelection {
            city: "Chennai".into(),
            facility: "B2C_Chennai_FK_FC".into(),
            order_type: OrderType::Urgent,
            vendor: "fresh".into(),
            date: "2024-01-25T10:00".into(),
        };
        let query = PurchaseOrderQuery::resolve(&filters, &cities, &facilities);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({
                "cityId": 1,
                "facilityId": 10,
                "deliveryDate": "2024-01-25",
                "offset": 0,
                "limit": 200,
                "purchaseOrderType": 1
            })
        );
    }

    #[test]
    fn test_unresolved_names_are_omitted() {
        let filters = FilterSelection {
            city: "Atlantis".into(),
            facility: "Nowhere_DC".into(),
            ..FilterSelection::default()
        };
        let query = PurchaseOrderQuery::resolve(&filters, &[city(1, "Chennai")], &[]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({ "offset": 0, "limit": 200, "purchaseOrderType": 0 })
        );
    }
}
