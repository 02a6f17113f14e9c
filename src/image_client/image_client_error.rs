#[derive(Debug, thiserror::Error)]
pub enum ImageClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Response body could not be read: {0}")]
    Body(String),

    #[error("Timeout")]
    Timeout,
}

/// Classification hooks over the underlying transport error, so the mapping
/// into [`ImageClientError`] can be exercised without a real socket.
#[cfg_attr(test, mockall::automock)]
pub trait ImageClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn error_string(&self) -> String;
}
