use crate::common::{PortfolioHeader, ResponseEntity};
use crate::di::{Container, Injectable};
use crate::model::{HighlightDto, PersonalValueDto, SubjectId};
use crate::service::{PortfolioService, ServiceError};
use axum::{Router, extract::State, routing::get};
use std::sync::Arc;

/// Owner whose portfolio is served. Fixed until requests carry an identity.
pub const SUBJECT_ID: SubjectId = SubjectId(1);

pub struct PortfolioController {
    service: Arc<dyn PortfolioService>,
}

impl PortfolioController {
    pub fn new(service: Arc<dyn PortfolioService>) -> Self {
        Self { service }
    }

    pub fn base_path() -> &'static str {
        "/portfolio"
    }

    /// `GET /highlights` and `GET /values`, relative to [`Self::base_path`].
    pub fn router<S>(controller: Arc<Self>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new()
            .route("/highlights", get(highlights))
            .route("/values", get(personal_values))
            .with_state(controller)
    }

    pub async fn get_highlights(&self) -> Result<ResponseEntity<Vec<HighlightDto>>, ServiceError> {
        tracing::debug!(
            subject = %SUBJECT_ID,
            header = %PortfolioHeader::Highlights,
            "Fetching highlights"
        );
        let highlights = self.service.fetch_highlights(SUBJECT_ID).await?;

        Ok(ResponseEntity::ok(highlights).with_header(
            PortfolioHeader::Highlights.name(),
            PortfolioHeader::Highlights.value(),
        ))
    }

    pub async fn get_personal_values(
        &self,
    ) -> Result<ResponseEntity<Vec<PersonalValueDto>>, ServiceError> {
        tracing::debug!(
            subject = %SUBJECT_ID,
            header = %PortfolioHeader::Values,
            "Fetching personal values"
        );
        let values = self.service.fetch_personal_values(SUBJECT_ID).await?;

        Ok(ResponseEntity::ok(values)
            .with_header(PortfolioHeader::Values.name(), PortfolioHeader::Values.value()))
    }
}

impl Injectable for PortfolioController {
    fn inject(container: &Container) -> crate::Result<Self> {
        Ok(Self::new(container.resolve_trait::<dyn PortfolioService>()?))
    }
}

async fn highlights(
    State(controller): State<Arc<PortfolioController>>,
) -> Result<ResponseEntity<Vec<HighlightDto>>, ServiceError> {
    controller.get_highlights().await
}

async fn personal_values(
    State(controller): State<Arc<PortfolioController>>,
) -> Result<ResponseEntity<Vec<PersonalValueDto>>, ServiceError> {
    controller.get_personal_values().await
}
