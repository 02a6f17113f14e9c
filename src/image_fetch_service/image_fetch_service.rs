use std::{path::Path, sync::Arc};

use tokio::{fs::File, io::AsyncWriteExt};
use tracing::{info, warn};

use crate::{
    image_client::{image_client::ImageClient, image_client_request::ImageClientRequest},
    image_fetch_service::{
        fetch_outcome::FetchOutcome, fetch_settings::FetchSettings,
        image_fetch_service_error::ImageFetchServiceError,
    },
};

/// Sends the configured prompt once and persists the image on success.
#[derive(Clone)]
pub struct ImageFetchService {
    client: Arc<dyn ImageClient>,
    settings: FetchSettings,
}

impl ImageFetchService {
    pub fn new(client: Arc<dyn ImageClient>, settings: FetchSettings) -> Self {
        Self { client, settings }
    }

    /// A non-200 answer is an `Ok(FetchOutcome::Rejected)`; only transport and
    /// filesystem faults are errors.
    pub async fn fetch(&self) -> Result<FetchOutcome, ImageFetchServiceError> {
        let request = ImageClientRequest::generate(
            &self.settings.endpoint,
            &self.settings.api_key,
            &self.settings.prompt,
        )?;

        let response = self.client.execute(request).await?;

        if !response.is_image() {
            warn!(status = response.status, "Image endpoint rejected the request");
            return Ok(FetchOutcome::Rejected {
                status: response.status,
                text: response.text(),
            });
        }

        // Written as received either way.
        if !response.looks_like_jpeg() {
            warn!(
                content_type = response.content_type().unwrap_or("none"),
                "Image endpoint answered 200 without a JPEG body"
            );
        }

        let path = &self.settings.output;
        write_image(path, &response.body).await?;

        info!(path = %path.display(), bytes = response.body.len(), "Image written");

        Ok(FetchOutcome::Saved { path: path.clone() })
    }
}

// Truncates any existing file. The handle is dropped on every path out of the
// block, including a failed write.
async fn write_image(path: &Path, image: &[u8]) -> Result<(), ImageFetchServiceError> {
    let write = async {
        let mut file = File::create(path).await?;
        file.write_all(image).await?;
        file.flush().await
    };

    write.await.map_err(|source| ImageFetchServiceError::Write {
        path: path.to_path_buf(),
        source,
    })
}
