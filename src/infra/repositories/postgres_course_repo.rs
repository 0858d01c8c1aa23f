use crate::domain::{models::course::{Course, NewCourse}, ports::CourseRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresCourseRepo {
    pool: PgPool,
}

impl PostgresCourseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepo {
    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE course_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, AppError> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>(
            "SELECT * FROM courses ORDER BY course_id ASC LIMIT $1 OFFSET $2",
        )
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(&self, course: &NewCourse) -> Result<Course, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (name, description, start_date, end_date, is_active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
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
        sqlx::query_as::<_, Course>(
            "UPDATE courses SET is_active = $1, updated_at = $2 WHERE course_id = $3 RETURNING *",
        )
            .bind(active)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Course not found".into()))
    }
}
