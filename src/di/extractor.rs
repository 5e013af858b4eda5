use crate::di::Container;
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use std::ops::Deref;
use std::sync::Arc;

/// Axum extractor resolving a service from the application's container.
///
/// Concrete services are looked up with [`Container::resolve`]; use
/// `Inject<dyn Trait>` for trait bindings, which go through
/// [`Container::resolve_trait`].
///
/// ```
/// use portfolio_server::di::Inject;
/// use portfolio_server::service::PortfolioService;
///
/// async fn ready(Inject(_service): Inject<dyn PortfolioService>) -> &'static str {
///     "ready"
/// }
/// ```
pub struct Inject<T: ?Sized>(pub Arc<T>);

/// Implemented by application state that carries the DI container
pub trait HasContainer {
    fn get_container(&self) -> &Container;
}

/// Lookup strategy for [`Inject`].
///
/// Sized types resolve as concrete services; each trait object that should be
/// injectable implements this next to its trait via [`Container::resolve_trait`].
pub trait Resolvable: Send + Sync + 'static {
    fn resolve_from(container: &Container) -> crate::Result<Arc<Self>>;
}

impl<T: Send + Sync + 'static> Resolvable for T {
    fn resolve_from(container: &Container) -> crate::Result<Arc<Self>> {
        container.resolve::<T>()
    }
}

impl<S, T> FromRequestParts<S> for Inject<T>
where
    S: Send + Sync + HasContainer,
    T: ?Sized + Resolvable,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        T::resolve_from(state.get_container()).map(Inject).map_err(|e| {
            tracing::error!(error = %e, "Dependency injection failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Dependency injection failed: {}", e),
            )
        })
    }
}

impl<T: ?Sized> Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: ?Sized> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Inject(Arc::clone(&self.0))
    }
}
