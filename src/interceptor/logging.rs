use crate::interceptor::{Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use axum::{body::Body, http::Request};
use std::time::Instant;

/// Logs method, path, status and latency of every request
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let start = Instant::now();

        tracing::debug!(%method, %uri, "--> request");

        match next.run(request).await {
            Ok(response) => {
                tracing::info!(
                    %method,
                    %uri,
                    status = response.status().as_u16(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "<-- response"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(
                    %method,
                    %uri,
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "<-- failed"
                );
                Err(e)
            }
        }
    }
}
