use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateUserRequest, ListUsersQuery};
use crate::api::extractors::validated_json::ValidatedJson;
use crate::domain::models::user::CreateUser;
use crate::error::AppError;
use crate::state::AppState;

pub async fn count_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.user_service.count().await?))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.user_service.get_by_id(user_id).await?))
}

pub async fn get_user_by_email(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.user_service.get_by_email(&email).await?))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListUsersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let users = state
        .user_service
        .list(query.user_type_id, query.skip, query.limit)
        .await?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .user_service
        .create(CreateUser {
            first_name: payload.first_name,
            last_name: payload.last_name,
            username: payload.username,
            email: payload.email,
            age: payload.age,
            is_active: payload.is_active,
            user_type_id: payload.user_type_id,
            password: payload.password,
        })
        .await?;

    info!("User created: {}", created.user_id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn deactivate_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.deactivate(user_id).await?;

    info!("User deactivated: {}", user_id);
    Ok(Json(user))
}

pub async fn activate_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.activate(user_id).await?;

    info!("User activated: {}", user_id);
    Ok(Json(user))
}
