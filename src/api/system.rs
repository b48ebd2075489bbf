//! Liveness and store introspection endpoints.

use axum::{extract::State, Json};

use crate::models::{HealthReport, Message};
use crate::AppState;

/// GET / - Liveness message.
pub async fn root() -> Json<Message> {
    Json(Message {
        message: "Time-Traveler Codex Backend Running",
    })
}

/// GET /api/hello - Static greeting.
pub async fn hello() -> Json<Message> {
    Json(Message {
        message: "Hello from the Codex API!",
    })
}

/// GET /test - Store connectivity report. Always answers 200.
pub async fn test_database(State(state): State<AppState>) -> Json<HealthReport> {
    let database_url_set = state.config.database_url.is_some();
    Json(state.content.health_check(database_url_set).await)
}
