use crate::di::Container;
use crate::error::Result;

/// Types that build themselves from the container.
///
/// ```
/// use portfolio_server::di::{Container, Injectable};
/// use portfolio_server::service::PortfolioService;
/// use std::sync::Arc;
///
/// struct Summary {
///     service: Arc<dyn PortfolioService>,
/// }
///
/// impl Injectable for Summary {
///     fn inject(container: &Container) -> portfolio_server::Result<Self> {
///         Ok(Self {
///             service: container.resolve_trait::<dyn PortfolioService>()?,
///         })
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
