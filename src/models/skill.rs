//! Skill model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A skill with a proficiency level.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Skill {
    pub name: String,
    /// Proficiency from 0 to 100
    #[serde(default = "default_level")]
    #[validate(range(min = 0, max = 100))]
    pub level: i64,
    #[serde(default = "default_category")]
    pub category: String,
    /// Lucide icon name or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

fn default_level() -> i64 {
    75
}

fn default_category() -> String {
    "General".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_applied() {
        let skill: Skill = serde_json::from_value(json!({"name": "Rust"})).unwrap();
        assert_eq!(skill.level, 75);
        assert_eq!(skill.category, "General");
        assert!(skill.icon.is_none());
        assert!(skill.validate().is_ok());
    }

    #[test]
    fn test_level_out_of_range() {
        let skill: Skill = serde_json::from_value(json!({"name": "Rust", "level": 120})).unwrap();
        let errors = skill.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("level"));

        let skill: Skill = serde_json::from_value(json!({"name": "Rust", "level": 100})).unwrap();
        assert!(skill.validate().is_ok());
    }
}
