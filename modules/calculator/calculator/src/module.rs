//! Calculator Module definition
//!
//! Owns the domain service and the page renderer, exposes the SDK client
//! and registers the HTTP routes.

use std::sync::Arc;

use axum::Router;
use calculator_sdk::CalculatorClient;

use crate::api::rest::routes;
use crate::api::rest::view::{HtmlViewRenderer, ViewRenderer};
use crate::config::CalculatorConfig;
use crate::domain::Service;
use crate::domain::local_client::CalculatorLocalClient;

/// Calculator module.
pub struct CalculatorModule {
    config: CalculatorConfig,
    service: Arc<Service>,
    renderer: Arc<dyn ViewRenderer>,
}

impl CalculatorModule {
    /// Name of the module's section under `modules` in the app config.
    pub const NAME: &'static str = "calculator";

    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        tracing::info!(page_title = %config.page_title, "Initializing calculator module");
        let renderer = Arc::new(HtmlViewRenderer::new(config.page_title.clone()));
        Self {
            config,
            service: Arc::new(Service::new()),
            renderer,
        }
    }

    /// Replace the default HTML renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn ViewRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// In-process client for other modules.
    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorClient> {
        Arc::new(CalculatorLocalClient::new(Arc::clone(&self.service)))
    }

    /// Add the module's routes to `router`.
    pub fn register_rest(&self, router: Router) -> Router {
        tracing::info!("Registering calculator REST routes");
        let router = routes::register_routes(
            router,
            &self.config,
            Arc::clone(&self.service),
            Arc::clone(&self.renderer),
        );
        tracing::info!("calculator REST routes registered");
        router
    }
}

impl Default for CalculatorModule {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}
