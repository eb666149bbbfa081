//! Computation model
//!
//! Holds two operands and computes the four operations on demand.
//! Results are widened to `i64`: every sum, difference, product and
//! quotient of two `i32` values fits, so no operation can overflow.

use calculator_sdk::{Operands, Operation};
use thiserror::Error;

/// The divisor of a division was zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("division by zero")]
pub struct DivisionByZero;

/// Two operands and the operations defined over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    num1: i64,
    num2: i64,
}

impl Calculator {
    #[must_use]
    pub fn new(operands: Operands) -> Self {
        Self {
            num1: i64::from(operands.num1),
            num2: i64::from(operands.num2),
        }
    }

    #[must_use]
    pub const fn add(&self) -> i64 {
        self.num1 + self.num2
    }

    #[must_use]
    pub const fn subtract(&self) -> i64 {
        self.num1 - self.num2
    }

    #[must_use]
    pub const fn multiply(&self) -> i64 {
        self.num1 * self.num2
    }

    /// Integer division, truncating toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the second operand is zero.
    #[allow(clippy::integer_division)]
    pub const fn divide(&self) -> Result<i64, DivisionByZero> {
        if self.num2 == 0 {
            return Err(DivisionByZero);
        }
        Ok(self.num1 / self.num2)
    }

    /// Dispatch to the operation named by `operation`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for `Operation::Divide` with a zero divisor.
    pub const fn apply(&self, operation: Operation) -> Result<i64, DivisionByZero> {
        match operation {
            Operation::Add => Ok(self.add()),
            Operation::Subtract => Ok(self.subtract()),
            Operation::Multiply => Ok(self.multiply()),
            Operation::Divide => self.divide(),
        }
    }
}
