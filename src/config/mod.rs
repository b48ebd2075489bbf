//! Configuration module for the Codex backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store connection string (e.g. `sqlite:./data/codex.sqlite`).
    /// When absent the server runs without a store and data endpoints fail.
    pub database_url: Option<String>,
    /// Display name of the database; derived from the URL when unset
    pub database_name: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let database_name = env::var("DATABASE_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty());

        let host: IpAddr = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid HOST: {}", e)))?;

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            database_name,
            bind_addr: SocketAddr::new(host, port),
            log_level,
        })
    }

    /// Name reported for the store: `DATABASE_NAME`, else the URL's file stem.
    pub fn resolved_database_name(&self) -> Option<String> {
        self.database_name
            .clone()
            .or_else(|| self.database_url.as_deref().and_then(database_name_from_url))
    }
}

/// Derive a database name from a SQLite URL such as `sqlite:./data/codex.sqlite?mode=rwc`.
pub fn database_name_from_url(url: &str) -> Option<String> {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    let path = path.split('?').next().unwrap_or(path);

    std::path::Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}
