use serde::{Deserialize, Serialize};

/// A notable personal or professional achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub icon: String,
}

impl HighlightDto {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            priority: priority.into(),
            icon: icon.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_flat_field_names() {
        let highlight = HighlightDto::new(
            "h1",
            "Top Performer",
            "Ranked first in the quarterly review",
            "career",
            "high",
            "trophy",
        );
        let json = serde_json::to_value(&highlight).unwrap();
        assert_eq!(json["title"], "Top Performer");
        assert_eq!(json["category"], "career");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["icon"], "trophy");
    }
}
