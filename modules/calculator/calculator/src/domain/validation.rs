//! Input validation
//!
//! Raw operand text is checked here so that nothing but well-formed `i32`
//! values reaches the computation model.

use std::num::IntErrorKind;

use calculator_sdk::{Operands, Operation};

use super::error::DomainError;

pub const NUM1: &str = "num1";
pub const NUM2: &str = "num2";
pub const OPERATION: &str = "operation";

/// Operand text exactly as it arrived in a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawOperands<'a> {
    pub num1: Option<&'a str>,
    pub num2: Option<&'a str>,
}

/// Parse both operands, reporting the first field that fails.
///
/// # Errors
/// Returns `DomainError::Validation` naming the offending field.
pub fn parse_operands(raw: RawOperands<'_>) -> Result<Operands, DomainError> {
    let num1 = parse_operand(NUM1, raw.num1)?;
    let num2 = parse_operand(NUM2, raw.num2)?;
    Ok(Operands::new(num1, num2))
}

/// Parse one operand.
///
/// # Errors
/// Returns `DomainError::Validation` when the value is missing, blank,
/// not a whole number, or outside the `i32` range.
pub fn parse_operand(field: &str, raw: Option<&str>) -> Result<i32, DomainError> {
    let text = raw.map(str::trim).unwrap_or_default();
    text.parse::<i32>().map_err(|e| {
        let message = match e.kind() {
            IntErrorKind::Empty => format!("{field} is required."),
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => format!(
                "{field} must be between {} and {}.",
                i32::MIN,
                i32::MAX
            ),
            _ => format!("{field} must be a whole number."),
        };
        DomainError::validation(field, message)
    })
}

/// Resolve an operation name.
///
/// # Errors
/// Returns `DomainError::Validation` for names outside the four operations.
pub fn parse_operation(raw: &str) -> Result<Operation, DomainError> {
    raw.parse::<Operation>().map_err(|_| {
        let names: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
        DomainError::validation(
            OPERATION,
            format!("{OPERATION} must be one of: {}.", names.join(", ")),
        )
    })
}
