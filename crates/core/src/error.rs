//! Unified error types for wikisearch.
//!
//! Each variant carries a stable code prefix that is also surfaced to the
//! host as a JSON-RPC error code.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the wikisearch plugin.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., a payload without a URL).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Invalid request or result URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Search request timed out.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Transport failure or non-success HTTP status.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Search response could not be parsed.
    #[error("PARSE_FAILED: {0}")]
    ParseFailed(String),

    /// The external opener could not be launched.
    #[error("OPEN_FAILED: {0}")]
    OpenFailed(String),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::InvalidUrl(msg) => (-32003, msg.clone()),
            Error::FetchTimeout(msg) => (-32006, msg.clone()),
            Error::HttpError(msg) => (-32008, msg.clone()),
            Error::ParseFailed(msg) => (-32013, msg.clone()),
            Error::OpenFailed(msg) => (-32014, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
