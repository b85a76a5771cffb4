use chrono::NaiveDate;

use super::row::{format_quantity, PurchaseOrderRow};
use crate::shared::format::format_timestamp;

pub const CSV_HEADERS: [&str; 10] = [
    "PO ID",
    "Vendor Name",
    "Payment Status",
    "City",
    "Facility",
    "Address",
    "Qty Target",
    "Target Delivery",
    "Created Time",
    "Created User",
];

/// Comma-separated export of the given rows, header row first.
pub fn to_csv(rows: &[PurchaseOrderRow]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.write_record([
            row.po_id.clone(),
            row.vendor_name.clone(),
            row.payment_status.as_str().to_string(),
            row.city.clone(),
            row.facility.clone(),
            row.address.clone(),
            format_quantity(row.qty_target),
            format_timestamp(row.target_delivery_ms),
            format_timestamp(row.created_time_ms),
            row.created_user.clone(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `purchase-orders-YYYY-MM-DD.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("purchase-orders-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_purchase_order::aggregate::fixtures::order;
    use crate::domain::a003_purchase_order::row::rows_from_orders;

    #[test]
    fn test_csv_layout() {
        let rows = rows_from_orders(
            &[order(1, "Fresh Farms, Pvt Ltd", Some("PAID")), order(2, "Green Valley", None)],
            "",
        );
        let csv = to_csv(&rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "PO ID,Vendor Name,Payment Status,City,Facility,Address,Qty Target,Target Delivery,Created Time,Created User"
        );
        assert_eq!(
            lines[1],
            "1,\"Fresh Farms, Pvt Ltd\",paid,Chennai,B2C_Chennai_FK_FC,\"No 1, Anna Nagar, Chennai\",100,25/01/2024 10:00,20/01/2024 14:30,NC3604"
        );
        assert!(lines[2].starts_with("2,Green Valley,not_paid,"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
        assert_eq!(export_file_name(date), "purchase-orders-2024-01-25.csv");
    }
}
