//! Wikipedia client error types.

use std::sync::Arc;

use wikisearch_core::Error;

/// Errors from the Wikipedia search client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WikiError {
    /// Search term rejected before sending.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Endpoint could not be turned into a request URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// The API answered with an `error` object.
    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for WikiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { WikiError::Timeout } else { WikiError::Network(Arc::new(err)) }
    }
}

impl From<WikiError> for Error {
    fn from(err: WikiError) -> Self {
        match err {
            WikiError::InvalidQuery(msg) => Error::InvalidInput(msg),
            WikiError::InvalidUrl(msg) => Error::InvalidUrl(msg),
            WikiError::Timeout => Error::FetchTimeout(err.to_string()),
            WikiError::Network(_) | WikiError::HttpError { .. } | WikiError::Api { .. } => {
                Error::HttpError(err.to_string())
            }
            WikiError::Parse(msg) => Error::ParseFailed(msg),
        }
    }
}
