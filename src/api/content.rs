//! Content API endpoints.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::{Collection, ContentBundle, DataPayload, InsertedId, SeedResponse};
use crate::AppState;

/// GET /api/content - Every collection in one bundle.
pub async fn get_content(State(state): State<AppState>) -> ApiResult<ContentBundle> {
    let bundle = state.content.get_all_content().await?;
    Ok(Json(bundle))
}

async fn create_in(
    state: &AppState,
    collection: Collection,
    payload: DataPayload,
) -> ApiResult<InsertedId> {
    let inserted_id = state.content.create_document(collection, payload.data).await?;
    tracing::info!(%collection, %inserted_id, "Created document");
    Ok(Json(InsertedId { inserted_id }))
}

/// POST /api/eras - Create an era.
pub async fn create_era(
    State(state): State<AppState>,
    Json(payload): Json<DataPayload>,
) -> ApiResult<InsertedId> {
    create_in(&state, Collection::Era, payload).await
}

/// POST /api/projects - Create a project.
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<DataPayload>,
) -> ApiResult<InsertedId> {
    create_in(&state, Collection::Project, payload).await
}

/// POST /api/skills - Create a skill.
pub async fn create_skill(
    State(state): State<AppState>,
    Json(payload): Json<DataPayload>,
) -> ApiResult<InsertedId> {
    create_in(&state, Collection::Skill, payload).await
}

/// POST /api/achievements - Create an achievement.
pub async fn create_achievement(
    State(state): State<AppState>,
    Json(payload): Json<DataPayload>,
) -> ApiResult<InsertedId> {
    create_in(&state, Collection::Achievement, payload).await
}

/// POST /api/profile - Replace the profile.
pub async fn set_profile(
    State(state): State<AppState>,
    Json(payload): Json<DataPayload>,
) -> ApiResult<InsertedId> {
    let inserted_id = state.content.set_profile(payload.data).await?;
    Ok(Json(InsertedId { inserted_id }))
}

/// POST /api/styles - Replace the global styles.
pub async fn set_styles(
    State(state): State<AppState>,
    Json(payload): Json<DataPayload>,
) -> ApiResult<InsertedId> {
    let inserted_id = state.content.set_styles(payload.data).await?;
    Ok(Json(InsertedId { inserted_id }))
}

/// POST /api/seed - Insert demo content into an empty store.
pub async fn seed(State(state): State<AppState>) -> ApiResult<SeedResponse> {
    let status = state.content.seed_demo().await?;
    Ok(Json(SeedResponse { status }))
}
