//! Error types for the apparent service.
//!
//! The computation core has exactly one failure mode, [`ValidationError`].
//! Everything else in [`ApparentError`] belongs to startup and the transport.

use thiserror::Error;

/// Summary label attached to every validation failure.
pub const VALIDATION_ERROR_LABEL: &str = "Validation error";

/// One or more required numeric inputs were missing or not parseable.
///
/// Carries one human-readable message per failing field, in field order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation error: {}", .messages.join("; "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

impl ValidationError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// The fixed summary label, independent of the individual messages.
    pub fn summary(&self) -> &'static str {
        VALIDATION_ERROR_LABEL
    }
}

/// The main error type for apparent operations.
#[derive(Error, Debug)]
pub enum ApparentError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request bodies or query strings that could not be decoded
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

/// Convenience type alias for Results with ApparentError
pub type Result<T> = std::result::Result<T, ApparentError>;
