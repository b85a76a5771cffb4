pub mod auth;
pub mod credentials;
pub mod login_form;
pub mod settings;
