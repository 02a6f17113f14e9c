use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info};

use crate::image_client::{
    image_client::ImageClient,
    image_client_error::{ImageClientError, ImageClientErrorChecker},
    image_client_request::{ImageClientHeaders, ImageClientRequest},
    image_client_response::ImageClientResponse,
};

#[derive(Clone)]
pub struct ReqwestImageClient {
    client: reqwest::Client,
}

impl ReqwestImageClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestImageClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl ImageClient for ReqwestImageClient {
    async fn execute(
        &self,
        request: ImageClientRequest,
    ) -> Result<ImageClientResponse, ImageClientError> {
        info!(url = %request.url, body_bytes = request.body.len(), "Requesting image");

        let headers = HeaderMap::try_from(request.headers)?;

        let reqwest_response = self
            .client
            .post(request.url)
            .headers(headers)
            .body(request.body)
            .send()
            .await
            .map_err(ImageClientError::from)?;

        let status = reqwest_response.status().as_u16();

        let headers: ImageClientHeaders = reqwest_response.headers().into();

        let body = reqwest_response
            .bytes()
            .await
            .map_err(|e| ImageClientError::Body(e.to_string()))?;

        debug!(status, body_bytes = body.len(), "Image endpoint responded");

        Ok(ImageClientResponse {
            status,
            headers,
            body,
        })
    }
}

impl ImageClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

impl<T: ImageClientErrorChecker> From<T> for ImageClientError {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            ImageClientError::Timeout
        } else if err.is_connect() || err.is_request() {
            ImageClientError::Network(err.error_string())
        } else {
            ImageClientError::InvalidRequest(err.error_string())
        }
    }
}

impl From<&HeaderMap> for ImageClientHeaders {
    fn from(headers: &HeaderMap) -> Self {
        let map = headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect();
        ImageClientHeaders(map)
    }
}

// Unlike response headers, an outgoing header is never dropped: a token that
// cannot travel as a header value fails the call before anything is sent.
impl TryFrom<ImageClientHeaders> for HeaderMap {
    type Error = ImageClientError;

    fn try_from(headers: ImageClientHeaders) -> Result<Self, Self::Error> {
        let mut header_map = HeaderMap::with_capacity(headers.len());
        for (k, v) in headers.0 {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|_| ImageClientError::InvalidRequest(format!("invalid header name {k}")))?;
            let value = HeaderValue::from_str(&v).map_err(|_| {
                ImageClientError::InvalidRequest(format!("invalid value for header {k}"))
            })?;
            header_map.insert(name, value);
        }
        Ok(header_map)
    }
}
