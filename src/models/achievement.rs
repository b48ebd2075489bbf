//! Achievement model.

use serde::{Deserialize, Serialize};

use super::HttpUrl;

/// Capsule animation used to display an achievement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Capsule {
    Pulse,
    Orbit,
    #[default]
    Glow,
    Spark,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<HttpUrl>,
    #[serde(default)]
    pub capsule: Capsule,
}
