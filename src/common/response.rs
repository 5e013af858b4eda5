use axum::{
    Json,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// An HTTP response assembled by a controller: status, headers and a JSON body.
///
/// Controllers return this instead of a bare `Json` so tests can inspect the
/// status and headers without going through the router.
///
/// # Example
/// ```
/// use portfolio_server::common::{PortfolioHeader, ResponseEntity};
/// use axum::http::StatusCode;
///
/// let response = ResponseEntity::ok(vec!["a", "b"])
///     .with_header(PortfolioHeader::Values.name(), PortfolioHeader::Values.value());
///
/// assert_eq!(response.status(), StatusCode::OK);
/// assert_eq!(response.header("Values").unwrap(), "value");
/// assert_eq!(response.body().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ResponseEntity<T: Serialize> {
    status: StatusCode,
    headers: HeaderMap,
    body: T,
}

impl<T: Serialize> ResponseEntity<T> {
    pub fn new(status: StatusCode, body: T) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }

    /// HTTP 200 with `body`.
    pub fn ok(body: T) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name.to_ascii_lowercase().as_str())
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

impl<T: Serialize> IntoResponse for ResponseEntity<T> {
    fn into_response(self) -> Response {
        (self.status, self.headers, Json(self.body)).into_response()
    }
}
