use crate::exception::ExceptionFilter;
use crate::service::ServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::error::Error;

/// Default filter: logs the error and renders a JSON error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpExceptionFilter;

impl HttpExceptionFilter {
    fn status_for(error: &(dyn Error + Send + Sync + 'static)) -> StatusCode {
        match error.downcast_ref::<ServiceError>() {
            Some(ServiceError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response {
        let status = Self::status_for(error.as_ref());
        tracing::error!(status = status.as_u16(), error = %error, "Request failed");

        (
            status,
            Json(json!({
                "statusCode": status.as_u16(),
                "message": error.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        )
            .into_response()
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        HttpExceptionFilter.catch(Box::new(self))
    }
}
