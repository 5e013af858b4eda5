use axum::response::Response;
use std::error::Error;

pub mod http;

pub use http::HttpExceptionFilter;

/// Turns an error that escaped a handler into a response.
///
/// Controllers do not catch service failures; the filter is the framework
/// boundary where they finally become HTTP.
pub trait ExceptionFilter: Send + Sync + 'static {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response;
}
