use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::domain::services::seeding;
use crate::error::AppError;
use crate::state::AppState;

pub async fn truncate_database(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    state.admin_repo.truncate_all().await?;

    info!("Database truncated");
    Ok(Json(serde_json::json!({ "status": "truncated" })))
}

pub async fn reseed_database(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    seeding::seed_defaults(&state).await?;

    info!("Database reseeded");
    Ok(Json(serde_json::json!({ "status": "seeded" })))
}
