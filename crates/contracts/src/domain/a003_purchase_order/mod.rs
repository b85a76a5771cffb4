pub mod aggregate;
pub mod export;
pub mod query;
pub mod row;
