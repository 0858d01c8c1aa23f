use std::sync::Arc;

use crate::domain::models::enrollment::{Enrollment, NewEnrollment};
use crate::domain::ports::{CourseRepository, EnrollmentRepository, UserRepository};
use crate::domain::services::clamp_page;
use crate::error::{AppError, FieldError, FieldErrorKind};

pub struct EnrollmentService {
    repo: Arc<dyn EnrollmentRepository>,
    user_repo: Arc<dyn UserRepository>,
    course_repo: Arc<dyn CourseRepository>,
}

impl EnrollmentService {
    pub fn new(
        repo: Arc<dyn EnrollmentRepository>,
        user_repo: Arc<dyn UserRepository>,
        course_repo: Arc<dyn CourseRepository>,
    ) -> Self {
        Self { repo, user_repo, course_repo }
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await
    }

    pub async fn get(&self, user_id: i64, course_id: i64) -> Result<Enrollment, AppError> {
        self.repo
            .find(user_id, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".into()))
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Enrollment>, AppError> {
        let (skip, limit) = clamp_page(skip, limit);
        self.repo.list(skip, limit).await
    }

    /// All three pre-checks run before anything is reported, so a client
    /// fixing its payload sees every problem at once.
    pub async fn create(&self, input: NewEnrollment) -> Result<Enrollment, AppError> {
        let mut errors = Vec::new();

        if self.repo.find(input.user_id, input.course_id).await?.is_some() {
            errors.push(FieldError::new(
                &["body", "user_id", "course_id"],
                format!(
                    "Enrollment already exists with the user_id: {} and course_id: {}",
                    input.user_id, input.course_id
                ),
                FieldErrorKind::Conflict,
            ));
        }

        if self.user_repo.find_by_id(input.user_id).await?.is_none() {
            errors.push(FieldError::new(
                &["body", "user_id"],
                format!("User not found for User ID: {}", input.user_id),
                FieldErrorKind::NotFound,
            ));
        }

        if self.course_repo.find_by_id(input.course_id).await?.is_none() {
            errors.push(FieldError::new(
                &["body", "course_id"],
                format!("Course not found for Course ID: {}", input.course_id),
                FieldErrorKind::NotFound,
            ));
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        // Composite-key races land here via the primary key constraint.
        match self.repo.create(&input).await {
            Err(e) if e.is_unique_violation() => Err(AppError::Conflict(format!(
                "Enrollment already exists with the user_id: {} and course_id: {}: {e}",
                input.user_id, input.course_id
            ))),
            other => other,
        }
    }

    pub async fn delete(&self, user_id: i64, course_id: i64) -> Result<Enrollment, AppError> {
        let enrollment = self.get(user_id, course_id).await?;
        self.repo.delete(user_id, course_id).await?;
        Ok(enrollment)
    }
}
