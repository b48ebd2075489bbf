//! Request and response bodies of the content API.

use serde::{Deserialize, Serialize};

use super::Document;

/// Everything the site renders, fetched in one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBundle {
    pub eras: Vec<Document>,
    pub projects: Vec<Document>,
    pub skills: Vec<Document>,
    pub achievements: Vec<Document>,
    pub profile: Option<Document>,
    pub styles: Document,
}

/// Body of every create/replace request: `{"data": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPayload {
    pub data: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertedId {
    pub inserted_id: String,
}

/// Outcome of a seed request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SeedStatus {
    Seeded,
    AlreadySeeded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub status: SeedStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Store connectivity report. Fields degrade to status text instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl HealthReport {
    pub fn not_connected() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_status_wire_names() {
        assert_eq!(serde_json::to_value(SeedStatus::Seeded).unwrap(), json!("seeded"));
        assert_eq!(
            serde_json::to_value(SeedStatus::AlreadySeeded).unwrap(),
            json!("already-seeded")
        );
    }

    #[test]
    fn test_payload_requires_object_data() {
        assert!(serde_json::from_value::<DataPayload>(json!({"data": {"a": 1}})).is_ok());
        assert!(serde_json::from_value::<DataPayload>(json!({"data": [1]})).is_err());
        assert!(serde_json::from_value::<DataPayload>(json!({})).is_err());
    }
}
