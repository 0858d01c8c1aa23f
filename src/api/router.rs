use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{admin, course, enrollment, health, user, user_type};
use crate::state::AppState;
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // User Types
        .route("/api/v1/user_types/count", get(user_type::count_user_types))
        .route("/api/v1/user_types/name/{name}", get(user_type::get_user_type_by_name))
        .route("/api/v1/user_types", get(user_type::list_user_types).post(user_type::create_user_type))
        .route("/api/v1/user_types/{user_type_id}", get(user_type::get_user_type).delete(user_type::delete_user_type))

        // Users
        .route("/api/v1/users/count", get(user::count_users))
        .route("/api/v1/users/email/{email}", get(user::get_user_by_email))
        .route("/api/v1/users", get(user::list_users).post(user::create_user))
        .route("/api/v1/users/{user_id}", get(user::get_user))
        .route("/api/v1/users/{user_id}/deactivate", put(user::deactivate_user))
        .route("/api/v1/users/{user_id}/activate", put(user::activate_user))

        // Courses
        .route("/api/v1/courses/count", get(course::count_courses))
        .route("/api/v1/courses/name/{name}", get(course::get_course_by_name))
        .route("/api/v1/courses", get(course::list_courses).post(course::create_course))
        .route("/api/v1/courses/{course_id}", get(course::get_course))
        .route("/api/v1/courses/{course_id}/deactivate", put(course::deactivate_course))
        .route("/api/v1/courses/{course_id}/activate", put(course::activate_course))

        // Enrollments
        .route("/api/v1/enrollments/count", get(enrollment::count_enrollments))
        .route("/api/v1/enrollments", get(enrollment::list_enrollments).post(enrollment::create_enrollment))
        .route("/api/v1/enrollments/{user_id}/{course_id}", get(enrollment::get_enrollment).delete(enrollment::delete_enrollment))

        // Maintenance
        .route("/api/v1/admin/truncate", delete(admin::truncate_database))
        .route("/api/v1/admin/reseed", post(admin::reseed_database))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
