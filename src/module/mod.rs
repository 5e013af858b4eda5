use crate::controller::PortfolioController;
use crate::di::{Container, Injectable};
use crate::error::{PortfolioError, Result};
use crate::service::{InMemoryPortfolioService, PortfolioService};
use std::sync::Arc;

/// A unit of registration: bindings first, then providers, then controllers.
pub trait Module {
    fn register(container: &mut Container) -> Result<()>;

    /// Create a new container and register this module
    fn create_container() -> Result<Container> {
        let mut container = Container::new();
        Self::register(&mut container)?;
        Ok(container)
    }
}

/// Wires the portfolio controller to its service.
///
/// If a `dyn PortfolioService` was already provided (a seeded store, or a
/// double in tests) it is kept; otherwise an empty in-memory store is bound.
pub struct PortfolioModule;

impl Module for PortfolioModule {
    fn register(container: &mut Container) -> Result<()> {
        if !container.contains::<dyn PortfolioService>() {
            container.register_trait::<dyn PortfolioService, InMemoryPortfolioService, _>(|s| {
                s as Arc<dyn PortfolioService>
            });
            let provider = InMemoryPortfolioService::inject(container)
                .map_err(|e| PortfolioError::module_registration("PortfolioModule", e))?;
            container.register(provider);
        }

        let controller = PortfolioController::inject(container)
            .map_err(|e| PortfolioError::module_registration("PortfolioModule", e))?;
        container.register(controller);

        tracing::debug!(services = container.len(), "Registered PortfolioModule");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HighlightDto, PortfolioRecords};
    use crate::controller::SUBJECT_ID;

    #[test]
    fn test_registers_controller_with_default_service() {
        let container = PortfolioModule::create_container().unwrap();
        assert!(container.resolve::<PortfolioController>().is_ok());
        assert!(container.resolve_trait::<dyn PortfolioService>().is_ok());
    }

    #[test]
    fn test_unresolvable_service_fails_registration() {
        let mut container = Container::new();
        // Bound to an implementation that was never registered.
        container.register_trait::<dyn PortfolioService, InMemoryPortfolioService, _>(|s| {
            s as Arc<dyn PortfolioService>
        });

        let err = PortfolioModule::register(&mut container).unwrap_err();

        assert!(matches!(
            err,
            PortfolioError::ModuleRegistrationFailed { ref message }
                if message.starts_with("PortfolioModule") && message.contains("PortfolioService")
        ));
        assert!(!container.contains::<PortfolioController>());
    }

    #[tokio::test]
    async fn test_keeps_a_provided_service() {
        let seeded = InMemoryPortfolioService::new();
        seeded.insert(
            SUBJECT_ID,
            PortfolioRecords {
                highlights: vec![HighlightDto::new("h1", "Seeded", "", "", "", "")],
                personal_values: vec![],
            },
        );

        let mut container = Container::new();
        container.provide::<dyn PortfolioService>(Arc::new(seeded));
        PortfolioModule::register(&mut container).unwrap();

        let controller = container.resolve::<PortfolioController>().unwrap();
        let response = controller.get_highlights().await.unwrap();
        assert_eq!(response.body()[0].title, "Seeded");
    }
}
