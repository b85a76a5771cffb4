use serde::{Deserialize, Serialize};

use crate::domain::a001_city::aggregate::City;
use crate::domain::a002_facility::aggregate::Facility;
use crate::shared::serde_utils::null_as_default;

// ============================================================================
// Nested records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vendor {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub address: Option<String>,
    pub short_name: Option<String>,
    pub active: Option<i64>,
    pub city: Option<City>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sku {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseOrderDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub sku: Option<Sku>,
    pub sku_quantity: Option<f64>,
    pub indent_quantity: Option<f64>,
    pub purchase_price: Option<f64>,
    pub sub_line_total: Option<f64>,
    pub expected_arrival_time: Option<i64>,
}

/// Goods-received note attached to an order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Grn {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub status: Option<i64>,
    pub created_at: Option<i64>,
    pub payment_status: Option<i64>,
    pub payment_status_text: Option<String>,
    #[serde(rename = "outStandingAmount")]
    pub outstanding_amount: Option<f64>,
    #[serde(rename = "totalGRNAmount")]
    pub total_grn_amount: Option<f64>,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Purchase order as returned by `GET /purchaseOrder`.
///
/// Read-only projection; the upstream record is much larger and unknown
/// fields are ignored. Nullable upstream fields are `Option`; a `null` list
/// reads as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseOrder {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub vendor: Option<Vendor>,
    pub city: Option<City>,
    pub facility: Option<Facility>,
    pub created_at: Option<i64>,
    pub created_by: Option<i64>,
    pub created_by_name: Option<String>,
    pub status: Option<i64>,
    pub delivery_date: Option<i64>,
    pub expected_delivery_time: Option<i64>,
    pub total_price: Option<f64>,
    #[serde(rename = "type")]
    pub order_type: Option<i64>,
    pub target_total_quantity: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_order_details: Vec<PurchaseOrderDetail>,
    #[serde(rename = "gRN")]
    #[serde(deserialize_with = "null_as_default")]
    pub grns: Vec<Grn>,
    pub grn_status: Option<String>,
    pub payable_amount: Option<f64>,
}

impl PurchaseOrder {
    pub fn vendor_name(&self) -> &str {
        self.vendor.as_ref().map(|v| v.name.as_str()).unwrap_or("")
    }

    /// City name, taken from the facility when the order carries none.
    pub fn city_name(&self) -> &str {
        self.city
            .as_ref()
            .map(|c| c.name.as_str())
            .or_else(|| self.facility.as_ref().map(|f| f.city.name.as_str()))
            .unwrap_or("")
    }

    pub fn facility_name(&self) -> &str {
        self.facility.as_ref().map(|f| f.name.as_str()).unwrap_or("")
    }

    /// Vendor address, else the facility address.
    pub fn address(&self) -> &str {
        self.vendor
            .as_ref()
            .and_then(|v| v.address.as_deref())
            .filter(|a| !a.is_empty())
            .or_else(|| self.facility.as_ref().and_then(|f| f.address.as_deref()))
            .unwrap_or("")
    }

    /// Target quantity; falls back to the sum of line quantities.
    pub fn quantity_target(&self) -> f64 {
        self.target_total_quantity.unwrap_or_else(|| {
            self.purchase_order_details
                .iter()
                .filter_map(|d| d.sku_quantity)
                .sum()
        })
    }

    pub fn created_user(&self) -> String {
        match (&self.created_by_name, self.created_by) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(id)) => id.to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn order(id: i64, vendor: &str, grn_status: Option<&str>) -> PurchaseOrder {
        PurchaseOrder {
            id,
            vendor: Some(Vendor {
                id: id * 10,
                name: vendor.to_string(),
                address: Some(format!("No {}, Anna Nagar, Chennai", id)),
                ..Vendor::default()
            }),
            city: Some(City {
                id: 1,
                name: "Chennai".into(),
                ..City::default()
            }),
            facility: Some(Facility {
                id: 10,
                name: "B2C_Chennai_FK_FC".into(),
                ..Facility::default()
            }),
            created_at: Some(1_705_761_000_000),
            created_by_name: Some("NC3604".into()),
            delivery_date: Some(1_706_176_800_000),
            target_total_quantity: Some(100.0 * id as f64),
            grns: grn_status
                .map(|s| {
                    vec![Grn {
                        id: 1,
                        payment_status_text: Some(s.to_string()),
                        ..Grn::default()
                    }]
                })
                .unwrap_or_default(),
            ..PurchaseOrder::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upstream_order() {
        let body = r#"[{
            "id": 5501,
            "vendor": {"id": 7, "name": "Fresh Farms Pvt Ltd", "address": "No 45, Anna Nagar", "shortName": null},
            "city": {"id": 1, "name": "Chennai", "languageId": 1, "cityType": 1},
            "facility": {"id": 10, "name": "B2C_Chennai_FK_FC", "city": {"id": 1, "name": "Chennai"}, "activeStatus": 1},
            "createdAt": 1705761000000,
            "createdBy": 3604,
            "createdByName": "NC3604",
            "deliveryDate": 1706176800000,
            "expectedDeliveryTime": null,
            "type": 0,
            "targetTotalQuantity": 500,
            "purchaseOrderDetails": [{"id": 1, "sku": {"id": 9, "name": "Tomato"}, "skuQuantity": 500}],
            "gRN": [{"id": 3, "paymentStatus": 2, "paymentStatusText": "PAID", "totalGRNAmount": 1200.5, "outStandingAmount": 0}],
            "grnStatus": "COMPLETED",
            "saleOrder": null
        }]"#;
        let orders: Vec<PurchaseOrder> = serde_json::from_str(body).unwrap();
        let order = &orders[0];
        assert_eq!(order.vendor_name(), "Fresh Farms Pvt Ltd");
        assert_eq!(order.city_name(), "Chennai");
        assert_eq!(order.facility_name(), "B2C_Chennai_FK_FC");
        assert_eq!(order.quantity_target(), 500.0);
        assert_eq!(order.order_type, Some(0));
        assert_eq!(order.grns[0].total_grn_amount, Some(1200.5));
        assert_eq!(order.grns[0].payment_status_text.as_deref(), Some("PAID"));
    }

    #[test]
    fn test_parse_orders_with_null_fields() {
        let body = r#"[
            {"id": 1, "gRN": null, "purchaseOrderDetails": null,
             "vendor": {"id": 7, "name": null}, "city": null},
            {"id": 2, "purchaseOrderDetails": [{"id": null, "sku": {"id": 9, "name": null}}],
             "gRN": [{"id": null, "paymentStatus": 1}]},
            {"id": 3}
        ]"#;
        let orders: Vec<PurchaseOrder> = serde_json::from_str(body).unwrap();
        assert_eq!(orders.len(), 3);

        assert!(orders[0].grns.is_empty());
        assert!(orders[0].purchase_order_details.is_empty());
        assert_eq!(orders[0].vendor.as_ref().map(|v| v.name.as_str()), Some(""));
        assert!(orders[0].city.is_none());

        assert_eq!(orders[1].purchase_order_details[0].id, 0);
        assert_eq!(
            orders[1].purchase_order_details[0].sku.as_ref().map(|s| s.name.as_str()),
            Some("")
        );
        assert_eq!(orders[1].grns[0].id, 0);
        assert_eq!(orders[1].grns[0].payment_status, Some(1));

        assert!(orders[2].grns.is_empty());
    }

    #[test]
    fn test_fallbacks() {
        let order = PurchaseOrder {
            id: 1,
            created_by: Some(3604),
            facility: Some(Facility {
                name: "BLR_Main_FC".into(),
                address: Some("Whitefield".into()),
                city: City {
                    id: 2,
                    name: "Bengaluru".into(),
                    ..City::default()
                },
                ..Facility::default()
            }),
            purchase_order_details: vec![
                PurchaseOrderDetail {
                    sku_quantity: Some(20.0),
                    ..PurchaseOrderDetail::default()
                },
                PurchaseOrderDetail {
                    sku_quantity: Some(5.5),
                    ..PurchaseOrderDetail::default()
                },
            ],
            ..PurchaseOrder::default()
        };
        assert_eq!(order.city_name(), "Bengaluru");
        assert_eq!(order.address(), "Whitefield");
        assert_eq!(order.vendor_name(), "");
        assert_eq!(order.quantity_target(), 25.5);
        assert_eq!(order.created_user(), "3604");
    }
}
