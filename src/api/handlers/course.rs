use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateCourseRequest, PageQuery};
use crate::api::extractors::validated_json::ValidatedJson;
use crate::domain::models::course::NewCourse;
use crate::error::AppError;
use crate::state::AppState;

pub async fn count_courses(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.course_service.count().await?))
}

pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.course_service.get_by_id(course_id).await?))
}

pub async fn get_course_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.course_service.get_by_name(&name).await?))
}

pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.course_service.list(page.skip, page.limit).await?))
}

pub async fn create_course(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<CreateCourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .course_service
        .create(NewCourse {
            name: payload.name,
            description: payload.description,
            start_date: payload.start_date,
            end_date: payload.end_date,
            is_active: payload.is_active,
        })
        .await?;

    info!("Course created: {}", created.course_id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn deactivate_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let course = state.course_service.deactivate(course_id).await?;

    info!("Course deactivated: {}", course_id);
    Ok(Json(course))
}

pub async fn activate_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let course = state.course_service.activate(course_id).await?;

    info!("Course activated: {}", course_id);
    Ok(Json(course))
}
