//! Project model.

use serde::{Deserialize, Serialize};

use super::{Document, HttpUrl};

/// Media attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// A showcased project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Key of the era this project belongs to. Not enforced.
    pub era_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<HttpUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<HttpUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<ProjectMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showcase_data: Option<Document>,
}
