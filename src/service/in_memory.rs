use super::{PortfolioService, ServiceError};
use crate::di::{Container, Injectable};
use crate::model::{HighlightDto, PersonalValueDto, PortfolioRecords, SubjectId};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;
use std::path::Path;

/// [`PortfolioService`] backed by a concurrent map.
///
/// Subjects without records yield empty lists rather than an error.
#[derive(Debug, Default)]
pub struct InMemoryPortfolioService {
    records: DashMap<SubjectId, PortfolioRecords>,
}

impl InMemoryPortfolioService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load records from a JSON object keyed by subject id:
    ///
    /// ```json
    /// { "1": { "highlights": [...], "personalValues": [...] } }
    /// ```
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Seed(format!("{}: {}", path.display(), e)))?;
        let service = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            subjects = service.records.len(),
            "Loaded portfolio seed data"
        );
        Ok(service)
    }

    pub fn from_json(raw: &str) -> Result<Self, ServiceError> {
        let parsed: HashMap<String, PortfolioRecords> =
            serde_json::from_str(raw).map_err(|e| ServiceError::Seed(e.to_string()))?;

        let service = Self::new();
        for (key, records) in parsed {
            let subject = key
                .parse::<SubjectId>()
                .map_err(|e| ServiceError::Seed(format!("invalid subject id '{}': {}", key, e)))?;
            service.insert(subject, records);
        }
        Ok(service)
    }

    /// Replace everything stored for `subject`.
    pub fn insert(&self, subject: SubjectId, records: PortfolioRecords) {
        self.records.insert(subject, records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl Injectable for InMemoryPortfolioService {
    fn inject(_container: &Container) -> crate::Result<Self> {
        Ok(Self::new())
    }
}

#[async_trait]
impl PortfolioService for InMemoryPortfolioService {
    async fn fetch_highlights(&self, subject: SubjectId) -> Result<Vec<HighlightDto>, ServiceError> {
        Ok(self
            .records
            .get(&subject)
            .map(|entry| entry.highlights.clone())
            .unwrap_or_default())
    }

    async fn fetch_personal_values(
        &self,
        subject: SubjectId,
    ) -> Result<Vec<PersonalValueDto>, ServiceError> {
        Ok(self
            .records
            .get(&subject)
            .map(|entry| entry.personal_values.clone())
            .unwrap_or_default())
    }
}
