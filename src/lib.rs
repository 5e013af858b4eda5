//! # portfolio-server
//!
//! Backend for a personal portfolio site. It serves two read-only lists for the
//! portfolio owner: *highlights* (notable achievements) and *personal values*
//! (guiding principles).
//!
//! ## Layout
//!
//! - **Controller** ([`controller::PortfolioController`]): one handler per
//!   endpoint, each a single call into the service wrapped in a
//!   [`common::ResponseEntity`] with a marker header.
//! - **Service** ([`service::PortfolioService`]): trait object injected into the
//!   controller; [`service::InMemoryPortfolioService`] is the default store.
//! - **Dependency injection** ([`di::Container`]): type-keyed registry with trait
//!   bindings, filled by [`module::PortfolioModule`].
//!
//! Service errors are not handled by the controller. They propagate out of the
//! handler and are rendered by [`exception::HttpExceptionFilter`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portfolio_server::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let container = ContainerBuilder::new()
//!         .provide::<dyn PortfolioService>(Arc::new(InMemoryPortfolioService::new()))
//!         .build();
//!     let router = build_router(container)?;
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, router)
//!         .with_graceful_shutdown(shutdown_signal())
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod common;
pub mod config;
pub mod controller;
pub mod di;
pub mod error;
pub mod exception;
pub mod interceptor;
pub mod lifecycle;
pub mod logging;
pub mod model;
pub mod module;
pub mod service;

pub use app::{AppState, build_router};
pub use common::ResponseEntity;
pub use di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
pub use error::{PortfolioError, Result};
pub use module::Module;

pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use portfolio_server::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::{AppState, build_router};
    pub use crate::common::{PortfolioHeader, ResponseEntity};
    pub use crate::config::{ConfigService, ServerConfig};
    pub use crate::controller::{PortfolioController, SUBJECT_ID};
    pub use crate::di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
    pub use crate::error::{PortfolioError, Result};
    pub use crate::exception::{ExceptionFilter, HttpExceptionFilter};
    pub use crate::interceptor::{Interceptor, InterceptorLayer, InterceptorResult, Next};
    pub use crate::lifecycle::shutdown_signal;
    pub use crate::model::{HighlightDto, PersonalValueDto, PortfolioRecords, SubjectId};
    pub use crate::module::{Module, PortfolioModule};
    pub use crate::service::{InMemoryPortfolioService, PortfolioService, ServiceError};
    pub use async_trait::async_trait;
    pub use axum::{Router, http::StatusCode, response::IntoResponse};
    pub use std::sync::Arc;
}
