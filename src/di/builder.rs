use crate::di::Container;
use std::sync::Arc;

/// Builder for constructing a dependency injection container
///
/// # Example
/// ```
/// use portfolio_server::di::ContainerBuilder;
/// use portfolio_server::service::{InMemoryPortfolioService, PortfolioService};
/// use std::sync::Arc;
///
/// let container = ContainerBuilder::new()
///     .register(InMemoryPortfolioService::new())
///     .bind::<dyn PortfolioService, InMemoryPortfolioService, _>(|s| s as Arc<dyn PortfolioService>)
///     .build();
/// assert!(container.resolve_trait::<dyn PortfolioService>().is_ok());
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Register a ready-made trait object
    pub fn provide<Trait>(mut self, instance: Arc<Trait>) -> Self
    where
        Trait: ?Sized + 'static + Send + Sync,
    {
        self.container.provide(instance);
        self
    }

    /// Bind a trait to a concrete implementation
    ///
    /// This enables resolving `Arc<dyn Trait>` to the registered implementation.
    pub fn bind<Trait, Impl, F>(mut self, caster: F) -> Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        self.container.register_trait::<Trait, Impl, F>(caster);
        self
    }

    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
