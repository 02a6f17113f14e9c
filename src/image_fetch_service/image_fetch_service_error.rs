use std::path::PathBuf;

use crate::image_client::{
    image_client_error::ImageClientError, image_client_request::ImageClientRequestError,
};

#[derive(Debug, thiserror::Error)]
pub enum ImageFetchServiceError {
    #[error(transparent)]
    Request(#[from] ImageClientRequestError),

    #[error(transparent)]
    Client(#[from] ImageClientError),

    #[error("Could not write image to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
