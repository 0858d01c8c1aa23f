use crate::domain::{models::course::{Course, NewCourse}, ports::CourseRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

const COURSE_COLUMNS: &str = "course_id, name, description, start_date, end_date, is_active, created_at, updated_at";

pub struct SqliteCourseRepo {
    pool: SqlitePool,
}

impl SqliteCourseRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for SqliteCourseRepo {
    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE course_id = ?"
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE name = ?"
        ))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY course_id ASC LIMIT ? OFFSET ?"
        ))
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(&self, course: &NewCourse) -> Result<Course, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, Course>(&format!(
            "INSERT INTO courses (name, description, start_date, end_date, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {COURSE_COLUMNS}"
        ))
            .bind(&course.name)
            .bind(&course.description)
            .bind(course.start_date)
            .bind(course.end_date)
            .bind(course.is_active)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses SET is_active = ?, updated_at = ? WHERE course_id = ? RETURNING {COURSE_COLUMNS}"
        ))
            .bind(active)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Course not found".into()))
    }
}
