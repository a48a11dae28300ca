//! Error types for the Chronos client
//!
//! Two layers, following the failure taxonomy of the prediction pipeline:
//!
//! - [`Error`]: anything that stops a request from producing a usable body
//!   (transport exhaustion, API status errors, malformed JSON, bad config).
//! - [`PredictionError`]: what the orchestrator reports to the view. It adds
//!   the "engine anomaly" case, a well-formed response without text, which is
//!   kept apart from connection failures.

use chronos_transport::TransportError;
use thiserror::Error;

/// Result type alias for operations that can fail with a Chronos error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Chronos client.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport gave up (network failure, retries exhausted, non-2xx status).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Failed to (de)serialize a request or response body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// HTTP status of the final response, for API status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Whether the failure happened before any HTTP status was received.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Error::Transport(err) if err.is_network())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

/// Outcome classification for a failed prediction.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The API answered successfully but the first candidate carried no text.
    #[error("Prediction response contained no text")]
    MissingText,

    /// The request failed or the body could not be parsed.
    #[error("Prediction request failed: {0}")]
    Request(#[from] Error),
}

impl From<TransportError> for PredictionError {
    fn from(err: TransportError) -> Self {
        PredictionError::Request(Error::Transport(err))
    }
}

impl From<serde_json::Error> for PredictionError {
    fn from(err: serde_json::Error) -> Self {
        PredictionError::Request(Error::Serialization(err))
    }
}
