pub mod list;
pub mod modals;
