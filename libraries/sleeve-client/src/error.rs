//! Error types for the hosted-service client.

use thiserror::Error;

/// Errors that can occur when talking to the hosted data or identity API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-success status; `body` is the raw
    /// response text, which is not assumed to be JSON
    #[error("Service error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Authentication required but the held session is missing or expired
    #[error("Authentication required")]
    AuthRequired,

    /// Sign-in rejected (bad credentials)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid service URL
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Service is offline or unreachable
    #[error("Service unreachable: {0}")]
    ServiceUnreachable(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
