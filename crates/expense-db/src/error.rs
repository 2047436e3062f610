//! Database error types

use thiserror::Error;

/// Errors that can occur when talking to the document database
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The path is empty or contains an illegal segment
    #[error("Invalid database path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// HTTP request failed (connection, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Database returned {status}: {body}")]
    Status { status: u16, body: String },

    /// A value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The server answered with a body we cannot interpret
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The client is missing required settings (e.g. database URL)
    #[error("Database not configured: {0}")]
    NotConfigured(String),
}
