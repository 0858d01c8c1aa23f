use std::sync::Arc;

use crate::domain::models::user_type::{NewUserType, UserType};
use crate::domain::ports::UserTypeRepository;
use crate::domain::services::clamp_page;
use crate::error::{AppError, FieldError, FieldErrorKind};

pub struct UserTypeService {
    repo: Arc<dyn UserTypeRepository>,
}

impl UserTypeService {
    pub fn new(repo: Arc<dyn UserTypeRepository>) -> Self {
        Self { repo }
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserType, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User Type not found".into()))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<UserType, AppError> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("User Type not found".into()))
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<UserType>, AppError> {
        let (skip, limit) = clamp_page(skip, limit);
        self.repo.list(skip, limit).await
    }

    pub async fn create(&self, input: NewUserType) -> Result<UserType, AppError> {
        let mut errors = Vec::new();

        if self.repo.find_by_name(&input.name).await?.is_some() {
            errors.push(FieldError::new(
                &["body", "name"],
                "User Type already exists",
                FieldErrorKind::Conflict,
            ));
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        // The pre-check races with concurrent inserts; the unique constraint
        // is the backstop.
        match self.repo.create(&input).await {
            Err(e) if e.is_unique_violation() => {
                Err(AppError::Conflict(format!("User Type already exists: {e}")))
            }
            other => other,
        }
    }

    pub async fn delete(&self, id: i64) -> Result<UserType, AppError> {
        let user_type = self.get_by_id(id).await?;

        match self.repo.delete(id).await {
            Ok(()) => Ok(user_type),
            Err(e) if e.is_foreign_key_violation() => Err(AppError::Conflict(format!(
                "User Type {id} is still referenced by existing users; \
                 list them via /api/v1/users?user_type_id={id} and reassign or deactivate them first"
            ))),
            Err(e) => Err(e),
        }
    }
}
