//! The named collections content is stored in.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use super::{Achievement, Document, Era, GlobalStyles, Profile, Project, Skill};

/// A content collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Era,
    Project,
    Skill,
    Achievement,
    Profile,
    Styles,
}

impl Collection {
    /// Store-level collection name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Era => "era",
            Collection::Project => "project",
            Collection::Skill => "skill",
            Collection::Achievement => "achievement",
            Collection::Profile => "profile",
            Collection::Styles => "styles",
        }
    }

    /// Check a payload against the collection's expected shape.
    ///
    /// The result is advisory: stores accept documents that do not conform.
    pub fn check_shape(&self, document: &Document) -> Result<(), String> {
        match self {
            Collection::Era => parse::<Era>(document).map(drop),
            Collection::Project => parse::<Project>(document).map(drop),
            Collection::Skill => parse::<Skill>(document)?
                .validate()
                .map_err(|e| e.to_string()),
            Collection::Achievement => parse::<Achievement>(document).map(drop),
            Collection::Profile => parse::<Profile>(document).map(drop),
            Collection::Styles => parse::<GlobalStyles>(document).map(drop),
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse<T: DeserializeOwned>(document: &Document) -> Result<T, String> {
    serde_json::from_value(Value::Object(document.clone())).map_err(|e| e.to_string())
}
