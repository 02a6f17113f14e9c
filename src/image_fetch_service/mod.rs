pub mod fetch_outcome;
pub mod fetch_settings;
pub mod image_fetch_service;
pub mod image_fetch_service_error;
