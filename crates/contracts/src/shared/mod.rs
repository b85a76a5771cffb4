pub mod api_error;
pub mod cache;
pub mod cascade;
pub mod filters;
pub mod format;
pub mod i18n;
pub mod list;
pub mod serde_utils;
