use http::StatusCode;

use crate::domain::error::{DIVISION_BY_ZERO_MESSAGE, DomainError};

use super::problem::{Problem, ValidationViolation};

pub const CODE_DIVISION_BY_ZERO: &str = "CALCULATOR_DIVISION_BY_ZERO";
pub const CODE_VALIDATION: &str = "CALCULATOR_VALIDATION";

fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

/// Map domain error to RFC 9457 Problem
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::DivisionByZero => Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Division By Zero",
            DIVISION_BY_ZERO_MESSAGE,
        )
        .with_code(CODE_DIVISION_BY_ZERO),
        DomainError::Validation { field, message } => validation_problem(field, message),
    };

    let problem = problem.with_instance(instance);
    match current_trace_id() {
        Some(trace_id) => problem.with_trace_id(trace_id),
        None => problem,
    }
}

/// Problem for input rejected before it reached the domain.
pub fn validation_problem(field: &str, message: &str) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Validation Failed", message)
        .with_code(CODE_VALIDATION)
        .with_errors(vec![ValidationViolation {
            field: field.to_owned(),
            message: message.to_owned(),
        }])
}

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}
