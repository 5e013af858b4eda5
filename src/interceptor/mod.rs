use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

mod layer;
mod logging;

pub use layer::{InterceptorLayer, InterceptorMiddleware};
pub use logging::LoggingInterceptor;

pub type InterceptorResult = Result<Response, InterceptorError>;

/// A type-erased error for interceptors
pub type InterceptorError = Box<dyn std::error::Error + Send + Sync>;

/// Future produced by one link of the chain
pub type InterceptorFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

type NextFn = Box<dyn FnOnce(Request<Body>) -> InterceptorFuture + Send>;

/// The remainder of the chain after the current interceptor
pub struct Next {
    run: NextFn,
}

impl Next {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request<Body>) -> InterceptorFuture + Send + 'static,
    {
        Self { run: Box::new(f) }
    }

    pub async fn run(self, request: Request<Body>) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// Runs around every request: may inspect or replace the request before
/// calling `next`, and the response after.
///
/// An `Err` is rendered by the exception filter, so an interceptor never has
/// to build error responses itself.
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult;
}
