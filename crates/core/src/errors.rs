//! Core error types for the cost evaluation crate.
//!
//! This module defines storage-agnostic error types. Persistence-specific
//! errors are converted to these types by the repository implementations.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the cost evaluation core.
///
/// Missing invoice pricing on a consumed movement is deliberately NOT an
/// error: it is carried as a boolean flag on every valuation result and
/// rendered as a diagnostic string on the snapshot, while the evaluation
/// still completes with the data available.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Valuation failed: {0}")]
    Valuation(#[from] ValuationError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Failed to convert between currencies: {0}")]
    CurrencyConversionFailed(String),

    #[error("Failed to convert between units of measure: {0}")]
    UomConversionFailed(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors that occur while reducing movement history to a unit cost.
#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("Invalid movement data: {0}")]
    InvalidMovement(String),

    #[error("Product reference values not found for product {0}")]
    MissingProductReference(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for caller input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid mode '{0}' for evaluation")]
    UnsupportedQueryMode(String),

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

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
