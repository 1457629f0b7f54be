//! Core error types for the AssetDesk application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from whatever backend implements the repository traits) are converted to
//! these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the asset management application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Repository operation failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Asset operation failed: {0}")]
    Asset(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors into this format.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A query failed to execute.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A unique constraint was violated (e.g., duplicate asset tag).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Internal/unexpected storage error.
    #[error("Internal repository error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
