use crate::controller::PortfolioController;
use crate::di::{Container, HasContainer, Inject};
use crate::error::Result;
use crate::interceptor::{InterceptorLayer, LoggingInterceptor};
use crate::module::{Module, PortfolioModule};
use crate::service::PortfolioService;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Container) -> Self {
        Self {
            container: Arc::new(container),
        }
    }
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// Register [`PortfolioModule`] into `container` and build the full router.
pub fn build_router(mut container: Container) -> Result<Router> {
    PortfolioModule::register(&mut container)?;
    let state = AppState::new(container);

    let portfolio = state.get_container().resolve::<PortfolioController>()?;

    Ok(Router::new()
        .route("/health", get(health))
        .nest(
            PortfolioController::base_path(),
            PortfolioController::router(portfolio),
        )
        .layer(InterceptorLayer::new().with(LoggingInterceptor))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Liveness plus a check that the portfolio service is wired.
async fn health(Inject(_service): Inject<dyn PortfolioService>) -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
