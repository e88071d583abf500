//! Error types for ocean-core

use thiserror::Error;

/// Result type alias using ocean-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ocean-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The transport could not complete the request (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("API error: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided message, or the status line
        message: String,
    },

    /// The response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Client configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Returns the HTTP status for API failures.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
