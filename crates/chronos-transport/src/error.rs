//! Transport error types

use crate::traits::HttpResponse;
use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur in transport operations
#[derive(Debug, Error)]
pub enum TransportError {
    /// Low-level HTTP failure (malformed response, body read error, ...)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Timeout error
    #[error("Timeout")]
    Timeout,

    /// The server answered with a non-2xx status.
    ///
    /// Carries the final response so callers can still inspect it.
    #[error("API returned status {status}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The response that ended the fetch
        response: Box<HttpResponse>,
    },

    /// The retry loop ended without producing a response or an error
    #[error("Max retries exceeded after {attempts} attempts")]
    MaxRetriesExceeded {
        /// Physical attempts made
        attempts: u32,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The request could not be issued as described
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic transport error
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// HTTP status code, if the error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error happened below the HTTP status layer
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Connection(_) | Self::Timeout)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
