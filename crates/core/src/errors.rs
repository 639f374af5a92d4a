//! Core error types for the Fintrack calculation engine.
//!
//! Calculators are total functions and never fail on numeric input; the only
//! fallible surface is the boundary conversion layer in [`crate::utils`],
//! which rejects malformed or non-finite caller input with these types
//! instead of letting it reach a calculation.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for caller-supplied input crossing the decimal boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Non-finite number is not representable as a monetary amount: {0}")]
    NonFinite(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}
