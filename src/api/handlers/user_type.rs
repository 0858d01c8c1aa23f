use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateUserTypeRequest, PageQuery};
use crate::api::extractors::validated_json::ValidatedJson;
use crate::domain::models::user_type::NewUserType;
use crate::error::AppError;
use crate::state::AppState;

pub async fn count_user_types(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.user_type_service.count().await?))
}

pub async fn get_user_type(
    State(state): State<Arc<AppState>>,
    Path(user_type_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.user_type_service.get_by_id(user_type_id).await?))
}

pub async fn get_user_type_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.user_type_service.get_by_name(&name).await?))
}

pub async fn list_user_types(
    State(state): State<Arc<AppState>>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.user_type_service.list(page.skip, page.limit).await?))
}

pub async fn create_user_type(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<CreateUserTypeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .user_type_service
        .create(NewUserType { name: payload.name })
        .await?;

    info!("User Type created: {}", created.user_type_id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_user_type(
    State(state): State<Arc<AppState>>,
    Path(user_type_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.user_type_service.delete(user_type_id).await?;

    info!("User Type deleted: {}", user_type_id);
    Ok(Json(deleted))
}
