use bytes::Bytes;

use crate::image_client::image_client_request::ImageClientHeaders;

pub const IMAGE_STATUS: u16 = 200;
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";
pub const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

#[derive(Debug, Clone)]
pub struct ImageClientResponse {
    pub status: u16,
    pub headers: ImageClientHeaders,
    pub body: Bytes,
}

impl ImageClientResponse {
    /// Only a plain 200 carries image bytes; every other status is a rejection.
    pub fn is_image(&self) -> bool {
        self.status == IMAGE_STATUS
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.find("content-type").map(String::as_str)
    }

    /// Declared as `image/jpeg` and starting with a JPEG SOI marker.
    pub fn looks_like_jpeg(&self) -> bool {
        self.content_type() == Some(JPEG_CONTENT_TYPE) && self.body.starts_with(&JPEG_MAGIC)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
