use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid request body: {0}")]
    Unprocessable(String),
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("Internal server error")]
    Internal,
}

/// One entry of the aggregated pre-insert validation envelope,
/// serialized as `{"loc": [...], "msg": "...", "type": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    ValueError,
    NotFound,
    Conflict,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind,
        }
    }
}

/// A duplicate name/email/pair is a conflict even when reported through the
/// accumulated envelope; missing references and malformed values are not.
pub fn validation_status(errors: &[FieldError]) -> StatusCode {
    if errors.iter().any(|e| e.kind == FieldErrorKind::Conflict) {
        StatusCode::CONFLICT
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

impl AppError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            AppError::Database(e)
                if e.as_database_error()
                    .map(|db| matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation))
                    .unwrap_or(false)
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            AppError::Database(e)
                if e.as_database_error()
                    .map(|db| matches!(db.kind(), sqlx::error::ErrorKind::ForeignKeyViolation))
                    .unwrap_or(false)
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for fe in field_errors {
                let msg = fe
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                let loc: Vec<&str> = if field == "__all__" {
                    vec!["body"]
                } else {
                    vec!["body", field.as_ref()]
                };
                out.push(FieldError::new(&loc, msg, FieldErrorKind::ValueError));
            }
        }
        AppError::Validation(out)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                if let Some(db_err) = e.as_database_error() {
                    match db_err.kind() {
                        sqlx::error::ErrorKind::UniqueViolation => {
                            return (
                                StatusCode::CONFLICT,
                                Json(json!({ "error": "Resource already exists (duplicate entry)" })),
                            )
                                .into_response();
                        }
                        sqlx::error::ErrorKind::ForeignKeyViolation => {
                            return (
                                StatusCode::CONFLICT,
                                Json(json!({ "error": "Operation violates referential integrity" })),
                            )
                                .into_response();
                        }
                        _ => {}
                    }
                }

                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Validation(errors) => {
                return (validation_status(errors), Json(json!({ "detail": errors })))
                    .into_response();
            }
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
