#![allow(dead_code)]

use async_trait::async_trait;
use portfolio_server::model::{HighlightDto, PersonalValueDto, SubjectId};
use portfolio_server::service::{PortfolioService, ServiceError};
use std::sync::Mutex;

/// Scripted `PortfolioService` that records every subject id it is asked for.
#[derive(Default)]
pub struct RecordingService {
    highlights: Option<Result<Vec<HighlightDto>, ServiceError>>,
    personal_values: Option<Result<Vec<PersonalValueDto>, ServiceError>>,
    highlight_calls: Mutex<Vec<SubjectId>>,
    value_calls: Mutex<Vec<SubjectId>>,
}

impl RecordingService {
    pub fn with_highlights(mut self, result: Result<Vec<HighlightDto>, ServiceError>) -> Self {
        self.highlights = Some(result);
        self
    }

    pub fn with_personal_values(
        mut self,
        result: Result<Vec<PersonalValueDto>, ServiceError>,
    ) -> Self {
        self.personal_values = Some(result);
        self
    }

    pub fn highlight_calls(&self) -> Vec<SubjectId> {
        self.highlight_calls.lock().unwrap().clone()
    }

    pub fn value_calls(&self) -> Vec<SubjectId> {
        self.value_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PortfolioService for RecordingService {
    async fn fetch_highlights(&self, subject: SubjectId) -> Result<Vec<HighlightDto>, ServiceError> {
        self.highlight_calls.lock().unwrap().push(subject);
        self.highlights.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_personal_values(
        &self,
        subject: SubjectId,
    ) -> Result<Vec<PersonalValueDto>, ServiceError> {
        self.value_calls.lock().unwrap().push(subject);
        self.personal_values.clone().unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn top_performer() -> HighlightDto {
    HighlightDto::new(
        "1",
        "Top Performer",
        "Recognised as top performer of the year",
        "Achievement",
        "High",
        "trophy",
    )
}

pub fn speaker() -> HighlightDto {
    HighlightDto::new(
        "2",
        "Conference Speaker",
        "Talk on building reliable backend services",
        "Community",
        "Medium",
        "mic",
    )
}

pub fn mentor() -> HighlightDto {
    HighlightDto::new("3", "Mentor", "Mentored five junior engineers", "Leadership", "Low", "users")
}

pub fn curiosity() -> PersonalValueDto {
    PersonalValueDto::new(
        "2",
        "Curiosity",
        "Always learning how things work underneath",
        "compass",
        "Medium",
    )
}

pub fn integrity() -> PersonalValueDto {
    PersonalValueDto::new(
        "1",
        "Integrity",
        "Doing the right thing when no one is watching",
        "shield",
        "High",
    )
}
