pub mod cli_arguments;
pub mod image_client;
pub mod image_fetch_service;
