use async_trait::async_trait;

use crate::image_client::{
    image_client_error::ImageClientError, image_client_request::ImageClientRequest,
    image_client_response::ImageClientResponse,
};

/// Transport seam: one request in, the raw status, headers and body out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageClient: Send + Sync {
    async fn execute(
        &self,
        request: ImageClientRequest,
    ) -> Result<ImageClientResponse, ImageClientError>;
}
