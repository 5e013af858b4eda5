use crate::exception::{ExceptionFilter, HttpExceptionFilter};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Errors raised while wiring the application together.
///
/// Request-time failures from the data layer are [`crate::service::ServiceError`]
/// and never pass through this type.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Module registration failed: {message}")]
    ModuleRegistrationFailed { message: String },

    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },
}

impl PortfolioError {
    pub fn module_registration(module: &str, source: PortfolioError) -> Self {
        Self::ModuleRegistrationFailed {
            message: format!("{}: {}", module, source),
        }
    }

    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for PortfolioError {
    fn into_response(self) -> axum::response::Response {
        HttpExceptionFilter.catch(Box::new(self))
    }
}
