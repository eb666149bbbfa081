//! HTTP host: router assembly, middleware stack and serving.

use std::time::Duration;

use anyhow::Context;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use calculator::{CalculatorConfig, CalculatorModule};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::{AppConfig, ServerConfig};

const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Build the complete application router.
///
/// # Errors
/// Returns an error if the calculator module section is invalid.
pub fn build_router(config: &AppConfig) -> anyhow::Result<Router> {
    let module_config: CalculatorConfig = config
        .module_config_or_default(CalculatorModule::NAME)
        .context("calculator module configuration")?;
    let module = CalculatorModule::new(module_config);

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(|| async { "ok" }));
    let router = module.register_rest(router);

    Ok(apply_middleware_stack(router, &config.server))
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
    )
}

/// Apply the host middleware layers, innermost first.
///
/// Runtime order (outermost -> innermost):
/// `SetRequestId` -> `PropagateRequestId` -> Trace -> Timeout -> `BodyLimit` -> Router.
pub fn apply_middleware_stack(mut router: Router, server: &ServerConfig) -> Router {
    // Body limit
    router = router.layer(RequestBodyLimitLayer::new(server.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(server.body_limit_bytes));

    // Timeout
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(server.request_timeout_secs),
    ));

    // Trace
    router = apply_trace_layer(router);

    // Request id: generated first, copied to the response
    router = router.layer(PropagateRequestIdLayer::x_request_id());
    router.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Bind and serve until `cancel` fires.
///
/// # Errors
/// Returns an error if the address is invalid, the socket cannot be bound,
/// or the server fails.
pub async fn serve(
    server: &ServerConfig,
    router: Router,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let addr = server.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
