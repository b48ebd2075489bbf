//! Time-Traveler Codex Backend
//!
//! A REST backend serving portfolio content from a document store.

mod api;
mod config;
mod content;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use content::ContentService;
use db::DocumentStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Time-Traveler Codex Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // The server still starts without a store; data endpoints then answer 500
    let store = open_store(&config).await;

    let state = AppState {
        content: Arc::new(ContentService::new(store)),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Open the document store named by `DATABASE_URL`, if any.
async fn open_store(config: &Config) -> Option<DocumentStore> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("No database configured (DATABASE_URL). Data endpoints are disabled!");
        return None;
    };

    match db::init_store(url, config.resolved_database_name()).await {
        Ok(store) => {
            tracing::info!("Database opened: {}", store.name().unwrap_or(url));
            Some(store)
        }
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            None
        }
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        .route("/hello", get(api::hello))
        .route("/content", get(api::get_content))
        // Collections
        .route("/eras", post(api::create_era))
        .route("/projects", post(api::create_project))
        .route("/skills", post(api::create_skill))
        .route("/achievements", post(api::create_achievement))
        // Singletons
        .route("/profile", post(api::set_profile))
        .route("/styles", post(api::set_styles))
        .route("/seed", post(api::seed));

    Router::new()
        .route("/", get(api::root))
        .route("/test", get(api::test_database))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
