use std::sync::Arc;

use crate::domain::models::course::{Course, NewCourse};
use crate::domain::ports::CourseRepository;
use crate::domain::services::clamp_page;
use crate::error::{AppError, FieldError, FieldErrorKind};

pub struct CourseService {
    repo: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Course, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".into()))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Course, AppError> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".into()))
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Course>, AppError> {
        let (skip, limit) = clamp_page(skip, limit);
        self.repo.list(skip, limit).await
    }

    pub async fn create(&self, input: NewCourse) -> Result<Course, AppError> {
        let mut errors = Vec::new();

        if self.repo.find_by_name(&input.name).await?.is_some() {
            errors.push(FieldError::new(
                &["body", "name"],
                "Course already exists",
                FieldErrorKind::Conflict,
            ));
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        match self.repo.create(&input).await {
            Err(e) if e.is_unique_violation() => {
                Err(AppError::Conflict(format!("Course already exists: {e}")))
            }
            other => other,
        }
    }

    pub async fn deactivate(&self, id: i64) -> Result<Course, AppError> {
        let course = self.get_by_id(id).await?;

        if !course.is_active {
            return Err(AppError::Conflict("Course is already not active".into()));
        }

        self.repo.set_active(id, false).await
    }

    pub async fn activate(&self, id: i64) -> Result<Course, AppError> {
        let course = self.get_by_id(id).await?;

        if course.is_active {
            return Err(AppError::Conflict("Course is already active".into()));
        }

        self.repo.set_active(id, true).await
    }
}
