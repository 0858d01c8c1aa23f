use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateEnrollmentRequest, PageQuery};
use crate::api::extractors::validated_json::ValidatedJson;
use crate::domain::models::enrollment::NewEnrollment;
use crate::error::AppError;
use crate::state::AppState;

pub async fn count_enrollments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.enrollment_service.count().await?))
}

pub async fn get_enrollment(
    State(state): State<Arc<AppState>>,
    Path((user_id, course_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.enrollment_service.get(user_id, course_id).await?))
}

pub async fn list_enrollments(
    State(state): State<Arc<AppState>>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.enrollment_service.list(page.skip, page.limit).await?))
}

pub async fn create_enrollment(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<CreateEnrollmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .enrollment_service
        .create(NewEnrollment {
            user_id: payload.user_id,
            course_id: payload.course_id,
            enrolled_date: payload.enrolled_date,
            end_date: payload.end_date,
            associative_data: payload.associative_data,
        })
        .await?;

    info!(
        "Enrollment created: user {} in course {}",
        created.user_id, created.course_id
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_enrollment(
    State(state): State<Arc<AppState>>,
    Path((user_id, course_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.enrollment_service.delete(user_id, course_id).await?;

    info!("Enrollment deleted: user {} in course {}", user_id, course_id);
    Ok(Json(deleted))
}
