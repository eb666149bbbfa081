use utoipa::OpenApi;

use super::dto::{CalculateRequest, CalculateResponse, OperationDto};
use super::handlers;
use super::problem::{Problem, ValidationViolation};

/// OpenAPI document for the calculator JSON API.
#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator API", description = "Integer arithmetic over two operands"),
    paths(handlers::calculate, handlers::list_operations),
    components(schemas(
        CalculateRequest,
        CalculateResponse,
        OperationDto,
        Problem,
        ValidationViolation
    )),
    tags((name = "calculator", description = "Arithmetic operations"))
)]
pub struct ApiDoc;
