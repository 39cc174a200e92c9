//! Error types for the export demo.

use thiserror::Error;

/// Export demo error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid command-line or environment configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request failed (connection, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response was JSON but not shaped like the chat contract.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Filesystem failure while writing the archive.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export demo operations.
pub type Result<T> = std::result::Result<T, Error>;
