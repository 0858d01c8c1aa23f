use crate::domain::{models::enrollment::{Enrollment, NewEnrollment}, ports::EnrollmentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::error;

const ENROLLMENT_COLUMNS: &str = "user_id, course_id, enrolled_date, end_date, associative_data, updated_at";

pub struct SqliteEnrollmentRepo {
    pool: SqlitePool,
}

impl SqliteEnrollmentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for SqliteEnrollmentRepo {
    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enrollments")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find(&self, user_id: i64, course_id: i64) -> Result<Option<Enrollment>, AppError> {
        sqlx::query_as::<_, Enrollment>(&format!(
            "SELECT {ENROLLMENT_COLUMNS} FROM enrollments WHERE user_id = ? AND course_id = ?"
        ))
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Enrollment>, AppError> {
        sqlx::query_as::<_, Enrollment>(&format!(
            "SELECT {ENROLLMENT_COLUMNS} FROM enrollments ORDER BY user_id ASC, course_id ASC LIMIT ? OFFSET ?"
        ))
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(&self, enrollment: &NewEnrollment) -> Result<Enrollment, AppError> {
        sqlx::query_as::<_, Enrollment>(&format!(
            "INSERT INTO enrollments (user_id, course_id, enrolled_date, end_date, associative_data, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {ENROLLMENT_COLUMNS}"
        ))
            .bind(enrollment.user_id)
            .bind(enrollment.course_id)
            .bind(enrollment.enrolled_date)
            .bind(enrollment.end_date)
            .bind(&enrollment.associative_data)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, user_id: i64, course_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM enrollments WHERE user_id = ? AND course_id = ?")
            .bind(user_id)
            .bind(course_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("SQLite Enrollment deletion failed: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Enrollment not found".into()));
        }
        Ok(())
    }
}
