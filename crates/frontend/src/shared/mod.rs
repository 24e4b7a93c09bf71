pub mod api_utils;
pub mod components;
pub mod config;
pub mod form_payload;
pub mod i18n;
pub mod notify;
pub mod platform;
pub mod record_form;
pub mod toast;
pub mod validation;
