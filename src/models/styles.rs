//! Global styles model.

use serde::{Deserialize, Serialize};

use super::Document;

/// Key of the one styles document reads care about.
pub const GLOBAL_STYLES_KEY: &str = "global";

/// Site-wide style settings. Unknown fields are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalStyles {
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_glow")]
    pub glow: f64,
    #[serde(flatten)]
    pub extra: Document,
}

impl GlobalStyles {
    pub fn with_glow(glow: f64) -> Self {
        Self {
            glow,
            ..Self::default()
        }
    }
}

/// `{key: "global", theme: "cyber", glow: 0.6}`, served when no styles are stored.
impl Default for GlobalStyles {
    fn default() -> Self {
        Self {
            key: default_key(),
            theme: default_theme(),
            glow: default_glow(),
            extra: Document::new(),
        }
    }
}

impl From<GlobalStyles> for Document {
    fn from(styles: GlobalStyles) -> Self {
        let mut document = styles.extra;
        document.insert("key".to_string(), styles.key.into());
        document.insert("theme".to_string(), styles.theme.into());
        document.insert("glow".to_string(), styles.glow.into());
        document
    }
}

fn default_key() -> String {
    GLOBAL_STYLES_KEY.to_string()
}

fn default_theme() -> String {
    "cyber".to_string()
}

fn default_glow() -> f64 {
    0.6
}
