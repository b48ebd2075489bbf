//! Data models for the Codex content collections.
//!
//! Stored documents are opaque JSON objects; the typed models describe the
//! expected shape of each collection and are used for seed data and conformance checks.

mod achievement;
mod collection;
mod content;
mod era;
mod profile;
mod project;
mod skill;
mod styles;

pub use achievement::*;
pub use collection::*;
pub use content::*;
pub use era::*;
pub use profile::*;
pub use project::*;
pub use skill::*;
pub use styles::*;

use serde::{Deserialize, Serialize};
use url::Url;

/// A schemaless stored document.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Convert a typed record into a storable document.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, serde_json::Error> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(serde::ser::Error::custom(format!(
            "expected an object, got {}",
            other
        ))),
    }
}

/// An absolute `http`/`https` URL with a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HttpUrl(String);

impl TryFrom<String> for HttpUrl {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let parsed = Url::parse(&value).map_err(|e| format!("'{}': {}", value, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!("'{}' is not an http(s) URL", value));
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(format!("'{}' has no host", value));
        }
        Ok(Self(value))
    }
}

impl From<HttpUrl> for String {
    fn from(url: HttpUrl) -> Self {
        url.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_url_accepts_web_urls() {
        assert!(HttpUrl::try_from("https://github.com/".to_string()).is_ok());
        assert!(HttpUrl::try_from("http://example.com/a?b=c".to_string()).is_ok());
    }

    #[test]
    fn test_http_url_rejects_others() {
        assert!(HttpUrl::try_from("ftp://example.com".to_string()).is_err());
        assert!(HttpUrl::try_from("https://".to_string()).is_err());
        assert!(HttpUrl::try_from("github.com".to_string()).is_err());
        assert!(HttpUrl::try_from("mailto:someone@example.com".to_string()).is_err());
    }

    #[test]
    fn test_http_url_rejects_malformed_hosts() {
        for bad in ["https://[::1", "http://:::::", "https://exa<>mple.com"] {
            assert!(HttpUrl::try_from(bad.to_string()).is_err(), "{}", bad);
        }
        assert!(HttpUrl::try_from("https://[::1]:8080/".to_string()).is_ok());
    }

    #[test]
    fn test_to_document_rejects_non_objects() {
        assert!(to_document(&vec![1, 2, 3]).is_err());
        let doc = to_document(&GlobalStyles::default()).unwrap();
        assert_eq!(doc["key"], "global");
    }
}
