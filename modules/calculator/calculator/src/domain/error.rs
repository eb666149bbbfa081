use calculator_sdk::CalculatorError;
use thiserror::Error;

use super::model::DivisionByZero;

/// Message shown to users when a division by zero is attempted.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Error: Division by zero.";

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Text for the error channel of a rendered page.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::DivisionByZero => DIVISION_BY_ZERO_MESSAGE.to_owned(),
            Self::Validation { message, .. } => format!("Error: {message}"),
        }
    }
}

impl From<DivisionByZero> for DomainError {
    fn from(_: DivisionByZero) -> Self {
        Self::DivisionByZero
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for CalculatorError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::DivisionByZero => CalculatorError::DivisionByZero,
            DomainError::Validation { field, message } => {
                CalculatorError::validation(field, message)
            }
        }
    }
}
