use crate::exception::{ExceptionFilter, HttpExceptionFilter};
use crate::interceptor::{Interceptor, InterceptorFuture, InterceptorResult, Next};
use axum::{body::Body, http::Request, response::Response};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower layer running a chain of [`Interceptor`]s, first added runs outermost.
#[derive(Clone, Default)]
pub struct InterceptorLayer {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, interceptor: impl Interceptor) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }
}

impl<S> Layer<S> for InterceptorLayer {
    type Service = InterceptorMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InterceptorMiddleware {
            inner,
            interceptors: Arc::new(self.interceptors.clone()),
        }
    }
}

#[derive(Clone)]
pub struct InterceptorMiddleware<S> {
    inner: S,
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
}

impl<S> Service<Request<Body>> for InterceptorMiddleware<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let interceptors = Arc::clone(&self.interceptors);

        // Keep the instance that was driven to readiness; leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let mut chain = Next::new(move |req| -> InterceptorFuture {
                Box::pin(async move {
                    let response = match inner.call(req).await {
                        Ok(response) => response,
                        Err(never) => match never {},
                    };
                    InterceptorResult::Ok(response)
                })
            });

            for interceptor in interceptors.iter().rev() {
                let interceptor = Arc::clone(interceptor);
                let next = chain;
                chain = Next::new(move |req| -> InterceptorFuture {
                    Box::pin(async move { interceptor.intercept(req, next).await })
                });
            }

            match chain.run(request).await {
                Ok(response) => Ok(response),
                Err(error) => Ok(HttpExceptionFilter.catch(error)),
            }
        })
    }
}
