use crate::domain::{models::user_type::{NewUserType, UserType}, ports::UserTypeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::error;

pub struct SqliteUserTypeRepo {
    pool: SqlitePool,
}

impl SqliteUserTypeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserTypeRepository for SqliteUserTypeRepo {
    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_types")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserType>, AppError> {
        sqlx::query_as::<_, UserType>(
            "SELECT user_type_id, name, created_at, updated_at FROM user_types WHERE user_type_id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UserType>, AppError> {
        sqlx::query_as::<_, UserType>(
            "SELECT user_type_id, name, created_at, updated_at FROM user_types WHERE name = ?",
        )
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<UserType>, AppError> {
        sqlx::query_as::<_, UserType>(
            "SELECT user_type_id, name, created_at, updated_at FROM user_types ORDER BY user_type_id ASC LIMIT ? OFFSET ?",
        )
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(&self, user_type: &NewUserType) -> Result<UserType, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, UserType>(
            "INSERT INTO user_types (name, created_at, updated_at) VALUES (?, ?, ?) RETURNING user_type_id, name, created_at, updated_at",
        )
            .bind(&user_type.name)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM user_types WHERE user_type_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("SQLite User Type deletion failed: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User Type not found".into()));
        }
        Ok(())
    }
}
