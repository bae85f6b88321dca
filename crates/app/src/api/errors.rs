//! API client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from talking to the POS backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport or serialization failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}")]
    Backend {
        /// Response status code.
        status: StatusCode,
        /// Human-readable message from the error envelope, when present.
        /// This is the only structured field this client interprets.
        message: Option<String>,
    },
}

impl ApiError {
    /// The server-provided message, when the backend supplied one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message, .. } => message.as_deref(),
            Self::Http(_) => None,
        }
    }
}
