//! Public error types for the calculator module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `CalculatorClient`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The divisor was zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The request was rejected before any arithmetic took place.
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },
}

impl CalculatorError {
    /// Create a Validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
