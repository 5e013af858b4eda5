use serde::{Deserialize, Serialize};

/// A stated guiding principle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalValueDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub importance: String,
}

impl PersonalValueDto {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        importance: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            importance: importance.into(),
        }
    }
}
