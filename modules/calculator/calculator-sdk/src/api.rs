//! Calculator API trait
//!
//! Contract trait for consumers of the calculator module.

use async_trait::async_trait;

use crate::errors::CalculatorError;
use crate::models::{Calculation, Operands, Operation};

/// Calculator API trait.
///
/// Every call is independent: the same operation over the same operands
/// always produces the same outcome.
#[async_trait]
pub trait CalculatorClient: Send + Sync {
    /// Apply `operation` to `operands`.
    ///
    /// # Errors
    /// Returns `CalculatorError::DivisionByZero` when dividing by zero.
    async fn calculate(
        &self,
        operation: Operation,
        operands: Operands,
    ) -> Result<Calculation, CalculatorError>;

    /// Operations this calculator supports, in display order.
    fn operations(&self) -> &'static [Operation] {
        &Operation::ALL
    }
}
