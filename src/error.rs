//! Unified SDK error types.

use std::num::ParseIntError;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// The caller passed an argument that can never produce a valid request.
    /// Raised before any I/O.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The response decoded fine but its primary collection was empty.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Setting error: {0}")]
    Setting(#[from] SettingError),
}

impl SdkError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::NotFound(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SdkError::Http(HttpError::Cancelled))
    }

    /// HTTP status of a remote rejection, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http(HttpError::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The request could not be built (bad path, header or URL).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The network exchange itself failed.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Request cancelled")]
    Cancelled,
}

/// Settings projection errors.
#[derive(Error, Debug)]
pub enum SettingError {
    #[error("Setting {id} has non-numeric value {value:?}: {source}")]
    InvalidNumber {
        id: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
