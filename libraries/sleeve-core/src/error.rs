//! Core error types for Sleeve

use thiserror::Error;

/// Result type alias using `SleeveError`
pub type Result<T> = std::result::Result<T, SleeveError>;

/// Core error type for Sleeve
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SleeveError {
    /// A value outside one of the closed vocabularies
    #[error("Unknown {kind} value: {value}")]
    UnknownVariant {
        kind: &'static str,
        value: String,
    },

    /// A widget timestamp that is not of the form YYYY-MM-DDTHH:MM
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl SleeveError {
    /// Create an unknown-variant error
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Create an invalid-timestamp error
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp(value.into())
    }
}
