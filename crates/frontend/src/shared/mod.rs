pub mod api_utils;
pub mod components;
pub mod export;
pub mod i18n;
pub mod icons;
pub mod modal;
pub mod network;
pub mod notice;
pub mod reference_data;
