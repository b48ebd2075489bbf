//! Era model: a themed period of the portfolio timeline.

use serde::{Deserialize, Serialize};

use super::Document;

/// Visual theme an era is rendered with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EraTheme {
    Ancient,
    Medieval,
    Industrial,
    Cyber,
    Cosmic,
    #[default]
    Custom,
}

/// An era. Projects point at it through `era_key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Era {
    /// Unique slug-like identifier, e.g. `ancient`
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub theme: EraTheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Color tokens for UI theming
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Document>,
    /// Image/video URL for the background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_media: Option<String>,
}
