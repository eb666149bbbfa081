//! Route registration for the calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use crate::config::CalculatorConfig;
use crate::domain::Service;

use super::handlers;
use super::openapi::ApiDoc;
use super::view::ViewRenderer;

/// Register all REST routes for the calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `config` - Module configuration (controls whether the JSON API is mounted)
/// * `service` - Domain Service
/// * `renderer` - Page renderer for the HTML form
pub fn register_routes(
    router: Router,
    config: &CalculatorConfig,
    service: Arc<Service>,
    renderer: Arc<dyn ViewRenderer>,
) -> Router {
    // GET / and GET /calculator - empty form
    // POST /calculator/{operation} - add | subtract | multiply | divide
    let mut router = router
        .route("/", get(handlers::index))
        .route("/calculator", get(handlers::index))
        .route("/calculator/{operation}", post(handlers::submit_form));

    if config.expose_api {
        let doc = ApiDoc::openapi();
        router = router
            .route("/calculator/v1/calculate", post(handlers::calculate))
            .route("/calculator/v1/operations", get(handlers::list_operations))
            .route(
                "/openapi.json",
                get(move || {
                    let doc = doc.clone();
                    async move { Json(doc) }
                }),
            );
    } else {
        tracing::info!("calculator JSON API disabled by configuration");
    }

    router.layer(Extension(service)).layer(Extension(renderer))
}
