//! Domain service for calculator
//!
//! Contains the core business logic shared by the HTML form, the JSON API
//! and the in-process client.

use calculator_sdk::{Calculation, Operands, Operation};
use tracing::{debug, instrument};

use super::error::DomainError;
use super::model::Calculator;
use super::validation::{self, RawOperands};

/// Domain service that performs calculator operations.
///
/// This is a stateless service: each call builds a fresh `Calculator`
/// over its operands, so it is shared across requests behind an `Arc`
/// without any locking.
#[derive(Clone, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Apply `operation` to already validated operands.
    ///
    /// # Errors
    /// Returns `DomainError::DivisionByZero` when dividing by zero.
    #[instrument(skip(self), fields(num1 = operands.num1, num2 = operands.num2))]
    pub fn calculate(
        &self,
        operation: Operation,
        operands: Operands,
    ) -> Result<Calculation, DomainError> {
        let result = Calculator::new(operands).apply(operation)?;
        debug!(result, "calculation completed");
        Ok(Calculation {
            operation,
            operands,
            result,
        })
    }

    /// Validate raw operand text, then calculate.
    ///
    /// # Errors
    /// Returns `DomainError::Validation` for malformed input (the computation
    /// is never attempted) or `DomainError::DivisionByZero`.
    pub fn calculate_raw(
        &self,
        operation: Operation,
        raw: RawOperands<'_>,
    ) -> Result<Calculation, DomainError> {
        let operands = validation::parse_operands(raw)?;
        self.calculate(operation, operands)
    }
}
