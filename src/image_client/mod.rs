pub mod image_client;
pub mod image_client_error;
pub mod image_client_request;
pub mod image_client_response;
pub mod reqwest_image_client;
