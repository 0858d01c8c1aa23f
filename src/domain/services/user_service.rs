use std::sync::Arc;

use crate::domain::models::user::{CreateUser, NewUser, User};
use crate::domain::ports::{CredentialHasher, UserRepository, UserTypeRepository};
use crate::domain::services::clamp_page;
use crate::error::{AppError, FieldError, FieldErrorKind};

pub struct UserService {
    repo: Arc<dyn UserRepository>,
    user_type_repo: Arc<dyn UserTypeRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl UserService {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        user_type_repo: Arc<dyn UserTypeRepository>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self { repo, user_type_repo, hasher }
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    /// When a user_type filter is supplied, the referenced type must exist;
    /// filtering by an unknown type is a lookup failure, not an empty page.
    pub async fn list(
        &self,
        user_type_id: Option<i64>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<User>, AppError> {
        if let Some(type_id) = user_type_id {
            if self.user_type_repo.find_by_id(type_id).await?.is_none() {
                return Err(AppError::NotFound("User Type not found".into()));
            }
        }

        let (skip, limit) = clamp_page(skip, limit);
        self.repo.list(user_type_id, skip, limit).await
    }

    pub async fn create(&self, input: CreateUser) -> Result<User, AppError> {
        let mut errors = Vec::new();

        if self.repo.find_by_email(&input.email).await?.is_some() {
            errors.push(FieldError::new(
                &["body", "email"],
                "Email already registered",
                FieldErrorKind::Conflict,
            ));
        }

        if self.user_type_repo.find_by_id(input.user_type_id).await?.is_none() {
            errors.push(FieldError::new(
                &["body", "user_type_id"],
                format!("User Type doesn't exist for User Type ID: {}", input.user_type_id),
                FieldErrorKind::NotFound,
            ));
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let new_user = NewUser {
            first_name: input.first_name,
            last_name: input.last_name,
            username: input.username,
            email: input.email,
            age: input.age,
            is_active: input.is_active,
            user_type_id: input.user_type_id,
            password_hash: self.hasher.hash(&input.password)?,
        };

        // Username uniqueness has no pre-check; the store's constraint
        // reports it, as it does for an email race.
        match self.repo.create(&new_user).await {
            Err(e) if e.is_unique_violation() => {
                Err(AppError::Conflict(format!("User already exists: {e}")))
            }
            other => other,
        }
    }

    pub async fn deactivate(&self, id: i64) -> Result<User, AppError> {
        let user = self.get_by_id(id).await?;

        if !user.is_active {
            return Err(AppError::Conflict("User is already not active".into()));
        }

        self.repo.set_active(id, false).await
    }

    pub async fn activate(&self, id: i64) -> Result<User, AppError> {
        let user = self.get_by_id(id).await?;

        if user.is_active {
            return Err(AppError::Conflict("User is already active".into()));
        }

        self.repo.set_active(id, true).await
    }
}
