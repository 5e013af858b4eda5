//! Data access for portfolio records.
//!
//! Controllers depend on [`PortfolioService`] as a trait object so the backing
//! store can be swapped without touching request handling.

mod in_memory;

pub use in_memory::InMemoryPortfolioService;

use crate::di::{Container, Resolvable};
use crate::model::{HighlightDto, PersonalValueDto, SubjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Failure raised by a [`PortfolioService`].
///
/// The `Display` output of each variant is exactly the message it carries, so
/// callers that surface the error see the original text untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("Failed to load seed data: {0}")]
    Seed(String),
}

#[async_trait]
pub trait PortfolioService: Send + Sync {
    /// Highlights of `subject`, in display order.
    async fn fetch_highlights(&self, subject: SubjectId) -> Result<Vec<HighlightDto>, ServiceError>;

    /// Personal values of `subject`, in display order.
    async fn fetch_personal_values(
        &self,
        subject: SubjectId,
    ) -> Result<Vec<PersonalValueDto>, ServiceError>;
}

impl Resolvable for dyn PortfolioService {
    fn resolve_from(container: &Container) -> crate::Result<Arc<Self>> {
        container.resolve_trait::<dyn PortfolioService>()
    }
}
