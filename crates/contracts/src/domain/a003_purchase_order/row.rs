//! Table projection of purchase orders.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::aggregate::{Grn, PurchaseOrder};
use crate::shared::i18n::MessageKey;
use crate::shared::list::Sortable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    NotPaid,
}

impl PaymentStatus {
    /// Status of the first GRN; orders without a GRN are not paid.
    ///
    /// Later GRNs are ignored even if their status differs.
    pub fn from_grns(grns: &[Grn]) -> Self {
        match grns.first().and_then(|g| g.payment_status_text.as_deref()) {
            Some("PAID") => PaymentStatus::Paid,
            Some("PENDING") | Some("PARTIALLY_PAID") => PaymentStatus::Pending,
            _ => PaymentStatus::NotPaid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::NotPaid => "not_paid",
        }
    }

    pub fn label_key(&self) -> MessageKey {
        match self {
            PaymentStatus::Paid => MessageKey::StatusPaid,
            PaymentStatus::Pending => MessageKey::StatusPending,
            PaymentStatus::NotPaid => MessageKey::StatusNotPaid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderRow {
    pub id: i64,
    pub po_id: String,
    pub vendor_name: String,
    pub payment_status: PaymentStatus,
    pub city: String,
    pub facility: String,
    pub address: String,
    pub qty_target: f64,
    pub target_delivery_ms: Option<i64>,
    pub created_time_ms: Option<i64>,
    pub created_user: String,
}

impl PurchaseOrderRow {
    pub fn from_order(order: &PurchaseOrder) -> Self {
        Self {
            id: order.id,
            po_id: order.id.to_string(),
            vendor_name: order.vendor_name().to_string(),
            payment_status: PaymentStatus::from_grns(&order.grns),
            city: order.city_name().to_string(),
            facility: order.facility_name().to_string(),
            address: order.address().to_string(),
            qty_target: order.quantity_target(),
            target_delivery_ms: order.delivery_date.or(order.expected_delivery_time),
            created_time_ms: order.created_at,
            created_user: order.created_user(),
        }
    }
}

/// Whole numbers without a fractional part, others as-is.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Case-insensitive vendor-name substring filter; an empty needle keeps everything.
pub fn filter_by_vendor(rows: Vec<PurchaseOrderRow>, vendor: &str) -> Vec<PurchaseOrderRow> {
    let needle = vendor.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|r| r.vendor_name.to_lowercase().contains(&needle))
        .collect()
}

pub fn rows_from_orders(orders: &[PurchaseOrder], vendor: &str) -> Vec<PurchaseOrderRow> {
    filter_by_vendor(orders.iter().map(PurchaseOrderRow::from_order).collect(), vendor)
}

impl Sortable for PurchaseOrderRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "po_id" => self.id.cmp(&other.id),
            "vendor_name" => self
                .vendor_name
                .to_lowercase()
                .cmp(&other.vendor_name.to_lowercase()),
            "payment_status" => self.payment_status.cmp(&other.payment_status),
            "qty_target" => self
                .qty_target
                .partial_cmp(&other.qty_target)
                .unwrap_or(Ordering::Equal),
            "target_delivery" => self.target_delivery_ms.cmp(&other.target_delivery_ms),
            "created_time" => self.created_time_ms.cmp(&other.created_time_ms),
            _ => Ordering::Equal,
        }
    }
}
