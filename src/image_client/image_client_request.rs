use std::{collections::HashMap, ops::Deref};

use bytes::Bytes;
use serde::Serialize;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageClientHeaders(pub HashMap<String, String>);

impl ImageClientHeaders {
    /// Case-insensitive lookup, header names are not normalised on insert.
    pub fn find(&self, name: &str) -> Option<&String> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }
}

impl Deref for ImageClientHeaders {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for ImageClientHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        ImageClientHeaders(arr.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptPayload<'a> {
    pub prompt: &'a str,
}

/// A single image generation call: always a POST of `{"prompt": ...}`.
#[derive(Debug, Clone)]
pub struct ImageClientRequest {
    pub url: String,
    pub headers: ImageClientHeaders,
    pub body: Bytes,
}

impl ImageClientRequest {
    pub fn generate(
        endpoint: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<Self, ImageClientRequestError> {
        let body = serde_json::to_vec(&PromptPayload { prompt })?;

        Ok(Self {
            url: endpoint.to_string(),
            headers: ImageClientHeaders::from([
                (AUTHORIZATION.to_string(), format!("Bearer {api_key}")),
                (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
            ]),
            body: Bytes::from(body),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImageClientRequestError {
    #[error("Prompt payload could not be encoded: {0}")]
    Encoding(#[from] serde_json::Error),
}
