pub mod a001_city;
pub mod a002_facility;
pub mod a003_purchase_order;
