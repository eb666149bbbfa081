//! REST handlers for the calculator module
//!
//! The form handlers always answer with a rendered page; the JSON handlers
//! answer with DTOs or RFC 9457 problems.

use std::sync::Arc;

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{Extension, Form, Json, Path};
use axum::http::Uri;
use axum::response::Html;
use calculator_sdk::Operation;
use http::StatusCode;
use tracing::{info, warn};

use crate::domain::validation::{self, NUM1, NUM2, RawOperands};
use crate::domain::{DomainError, Service};

use super::dto::{CalculateRequest, CalculateResponse, CalculatorForm, OperandInput, OperationDto};
use super::error::{domain_error_to_problem, validation_problem};
use super::problem::Problem;
use super::view::{ViewModel, ViewRenderer};

fn page(
    renderer: &dyn ViewRenderer,
    status: StatusCode,
    view: &ViewModel,
) -> (StatusCode, Html<String>) {
    (status, Html(renderer.render(view)))
}

/// Handler for GET / and GET /calculator
pub async fn index(
    Extension(renderer): Extension<Arc<dyn ViewRenderer>>,
) -> (StatusCode, Html<String>) {
    page(renderer.as_ref(), StatusCode::OK, &ViewModel::empty())
}

/// Handler for POST /calculator/{operation}
///
/// Division by zero is an expected outcome of the form and renders with
/// `200 OK`; malformed input renders with `400 Bad Request`.
pub async fn submit_form(
    Extension(service): Extension<Arc<Service>>,
    Extension(renderer): Extension<Arc<dyn ViewRenderer>>,
    Path(operation): Path<String>,
    form: Result<Form<CalculatorForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let renderer = renderer.as_ref();

    let operation = match validation::parse_operation(&operation) {
        Ok(op) => op,
        Err(err) => {
            warn!(%operation, "rejected unknown operation");
            return page(
                renderer,
                StatusCode::BAD_REQUEST,
                &ViewModel::from_error(&err, None, None),
            );
        }
    };

    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(error = %rejection, "rejected form body");
            let err = DomainError::validation("form", rejection.body_text());
            return page(
                renderer,
                StatusCode::BAD_REQUEST,
                &ViewModel::from_error(&err, None, None),
            );
        }
    };

    let raw = form.raw();
    match service.calculate_raw(operation, raw) {
        Ok(calc) => page(renderer, StatusCode::OK, &ViewModel::from_calculation(&calc)),
        Err(err) => {
            let status = match err {
                DomainError::DivisionByZero => {
                    info!(%operation, "division by zero requested");
                    StatusCode::OK
                }
                DomainError::Validation { ref field, .. } => {
                    warn!(%operation, %field, "rejected form input");
                    StatusCode::BAD_REQUEST
                }
            };
            let view = ViewModel::from_error(
                &err,
                validation::parse_operand(NUM1, raw.num1).ok(),
                validation::parse_operand(NUM2, raw.num2).ok(),
            );
            page(renderer, status, &view)
        }
    }
}

/// Handler for POST /calculator/v1/calculate
#[utoipa::path(
    post,
    path = "/calculator/v1/calculate",
    tag = "calculator",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalculateResponse),
        (status = 400, description = "Malformed body or invalid operand/operation", body = Problem,
            content_type = "application/problem+json"),
        (status = 422, description = "Division by zero", body = Problem,
            content_type = "application/problem+json"),
    )
)]
pub async fn calculate(
    Extension(service): Extension<Arc<Service>>,
    uri: Uri,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, Problem> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected JSON body");
        validation_problem("body", &rejection.body_text()).with_instance(uri.path())
    })?;

    let operation = validation::parse_operation(req.operation.as_deref().unwrap_or_default())
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    let num1 = req.num1.as_ref().map(OperandInput::to_text);
    let num2 = req.num2.as_ref().map(OperandInput::to_text);
    let raw = RawOperands {
        num1: num1.as_deref(),
        num2: num2.as_deref(),
    };

    let calc = service.calculate_raw(operation, raw).map_err(|e| {
        if let DomainError::Validation { ref field, .. } = e {
            warn!(%operation, %field, "rejected JSON input");
        }
        domain_error_to_problem(&e, uri.path())
    })?;

    Ok(Json(calc.into()))
}

/// Handler for GET /calculator/v1/operations
#[utoipa::path(
    get,
    path = "/calculator/v1/operations",
    tag = "calculator",
    responses(
        (status = 200, description = "Supported operations", body = [OperationDto]),
    )
)]
pub async fn list_operations() -> Json<Vec<OperationDto>> {
    Json(Operation::ALL.into_iter().map(OperationDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, header};
    use axum::routing::{get, post};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt as _;

    use crate::api::rest::view::HtmlViewRenderer;

    fn create_test_router() -> Router {
        let renderer: Arc<dyn ViewRenderer> = Arc::new(HtmlViewRenderer::default());
        Router::new()
            .route("/calculator", get(index))
            .route("/calculator/{operation}", post(submit_form))
            .route("/calculator/v1/calculate", post(calculate))
            .route("/calculator/v1/operations", get(list_operations))
            .layer(Extension(Arc::new(Service::new())))
            .layer(Extension(renderer))
    }

    fn form_request(path: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn json_request(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/calculator/v1/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_empty_form() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .uri("/calculator")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<form"));
        assert!(!html.contains("Result:"));
    }

    #[tokio::test]
    async fn test_form_add() {
        let response = create_test_router()
            .oneshot(form_request("/calculator/add", "num1=5&num2=3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Result: 8"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[tokio::test]
    async fn test_form_divide_by_zero() {
        let response = create_test_router()
            .oneshot(form_request("/calculator/divide", "num1=5&num2=0"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Error: Division by zero."));
        assert!(!html.contains("Result:"));
        assert!(html.contains(r#"value="5""#));
    }

    #[tokio::test]
    async fn test_form_non_numeric_input() {
        let response = create_test_router()
            .oneshot(form_request("/calculator/multiply", "num1=abc&num2=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_string(response).await;
        assert!(html.contains("Error: num1 must be a whole number."));
        assert!(html.contains(r#"value="2""#));
        assert!(!html.contains("Result:"));
    }

    #[tokio::test]
    async fn test_form_unknown_operation() {
        let response = create_test_router()
            .oneshot(form_request("/calculator/modulo", "num1=5&num2=3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_string(response).await;
        assert!(html.contains("operation must be one of"));
    }

    #[tokio::test]
    async fn test_json_calculate() {
        let response = create_test_router()
            .oneshot(json_request(
                &json!({ "num1": -7, "num2": 2, "operation": "divide" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["result"], -3);
        assert_eq!(body["operation"], "divide");
    }

    #[tokio::test]
    async fn test_json_divide_by_zero_is_problem() {
        let response = create_test_router()
            .oneshot(json_request(
                &json!({ "num1": 5, "num2": 0, "operation": "divide" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["code"], "CALCULATOR_DIVISION_BY_ZERO");
        assert_eq!(body["detail"], "Error: Division by zero.");
        assert_eq!(body["instance"], "/calculator/v1/calculate");
        assert!(body.get("result").is_none());
    }

    async fn json_problem(body: &Value) -> (StatusCode, Value) {
        let response = create_test_router()
            .oneshot(json_request(body))
            .await
            .unwrap();
        let status = response.status();
        let body = serde_json::from_str(&body_string(response).await).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_json_non_numeric_operand_names_field() {
        let (status, body) =
            json_problem(&json!({ "num1": "five", "num2": 0, "operation": "add" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "CALCULATOR_VALIDATION");
        assert_eq!(body["errors"][0]["field"], "num1");
        assert_eq!(body["errors"][0]["message"], "num1 must be a whole number.");
    }

    #[tokio::test]
    async fn test_json_out_of_range_operand_matches_form_message() {
        let (status, body) =
            json_problem(&json!({ "num1": 2_147_483_648_i64, "num2": 1, "operation": "add" }))
                .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "num1");
        assert_eq!(
            body["errors"][0]["message"],
            "num1 must be between -2147483648 and 2147483647."
        );
        assert_eq!(body["instance"], "/calculator/v1/calculate");
    }

    #[tokio::test]
    async fn test_json_missing_and_fractional_operands() {
        let (status, body) = json_problem(&json!({ "num1": 4, "operation": "add" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "num2");
        assert_eq!(body["errors"][0]["message"], "num2 is required.");

        let (status, body) =
            json_problem(&json!({ "num1": 4, "num2": 1.5, "operation": "add" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["message"], "num2 must be a whole number.");
    }

    #[tokio::test]
    async fn test_json_operation_is_case_insensitive() {
        let (status, body) =
            json_problem(&json!({ "num1": 5, "num2": 3, "operation": "Add" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], 8);
        assert_eq!(body["operation"], "add");
    }

    #[tokio::test]
    async fn test_json_unknown_operation() {
        let (status, body) =
            json_problem(&json!({ "num1": 5, "num2": 3, "operation": "modulo" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "operation");
        assert_eq!(
            body["errors"][0]["message"],
            "operation must be one of: add, subtract, multiply, divide."
        );
    }

    #[tokio::test]
    async fn test_json_syntax_error_is_body_problem() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculator/v1/calculate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"num1": 5, "num2":"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["code"], "CALCULATOR_VALIDATION");
        assert_eq!(body["errors"][0]["field"], "body");
    }

    #[tokio::test]
    async fn test_list_operations() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .uri("/calculator/v1/operations")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, json!(["add", "subtract", "multiply", "divide"]));
    }
}
