//! REST DTOs for the calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use calculator_sdk::{Calculation, Operation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::validation::RawOperands;

/// Arithmetic operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OperationDto {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl From<Operation> for OperationDto {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Add => Self::Add,
            Operation::Subtract => Self::Subtract,
            Operation::Multiply => Self::Multiply,
            Operation::Divide => Self::Divide,
        }
    }
}

/// Operand as sent by a JSON client.
///
/// Numbers and numeric strings are both accepted; the value is checked by
/// the domain validation so the API reports the same messages as the form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OperandInput {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl OperandInput {
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Request to apply an operation to two operands.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CalculateRequest {
    /// First operand
    #[schema(value_type = i32)]
    pub num1: Option<OperandInput>,
    /// Second operand
    #[schema(value_type = i32)]
    pub num2: Option<OperandInput>,
    /// Operation to apply (case-insensitive)
    #[schema(value_type = OperationDto)]
    pub operation: Option<String>,
}

/// Result of a successful calculation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    pub num1: i32,
    pub num2: i32,
    pub operation: OperationDto,
    /// Exact result; division truncates toward zero
    pub result: i64,
}

impl From<Calculation> for CalculateResponse {
    fn from(calc: Calculation) -> Self {
        Self {
            num1: calc.operands.num1,
            num2: calc.operands.num2,
            operation: calc.operation.into(),
            result: calc.result,
        }
    }
}

/// Form fields posted by the calculator page.
///
/// Kept as text so that malformed numbers are reported by the domain
/// validation instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorForm {
    pub num1: Option<String>,
    pub num2: Option<String>,
}

impl CalculatorForm {
    #[must_use]
    pub fn raw(&self) -> RawOperands<'_> {
        RawOperands {
            num1: self.num1.as_deref(),
            num2: self.num2.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> CalculateRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn operands_accept_numbers_and_text() {
        let req = request(r#"{"num1": 2147483648, "num2": "7", "operation": "Add"}"#);
        assert_eq!(req.num1.as_ref().map(OperandInput::to_text).as_deref(), Some("2147483648"));
        assert_eq!(req.num2.as_ref().map(OperandInput::to_text).as_deref(), Some("7"));
        assert_eq!(req.operation.as_deref(), Some("Add"));
    }

    #[test]
    fn fractional_operand_keeps_its_text() {
        let req = request(r#"{"num1": 1.5, "num2": 2, "operation": "add"}"#);
        assert_eq!(req.num1, Some(OperandInput::Number(1.5)));
        assert_eq!(req.num1.as_ref().map(OperandInput::to_text).as_deref(), Some("1.5"));
    }

    #[test]
    fn missing_fields_are_none() {
        let req = request("{}");
        assert!(req.num1.is_none());
        assert!(req.num2.is_none());
        assert!(req.operation.is_none());
    }
}
