use crate::domain::{models::user_type::{NewUserType, UserType}, ports::UserTypeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresUserTypeRepo {
    pool: PgPool,
}

impl PostgresUserTypeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserTypeRepository for PostgresUserTypeRepo {
    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_types")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserType>, AppError> {
        sqlx::query_as::<_, UserType>("SELECT * FROM user_types WHERE user_type_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UserType>, AppError> {
        sqlx::query_as::<_, UserType>("SELECT * FROM user_types WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<UserType>, AppError> {
        sqlx::query_as::<_, UserType>(
            "SELECT * FROM user_types ORDER BY user_type_id ASC LIMIT $1 OFFSET $2",
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
            "INSERT INTO user_types (name, created_at, updated_at) VALUES ($1, $2, $3) RETURNING *",
        )
            .bind(&user_type.name)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM user_types WHERE user_type_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User Type not found".into()));
        }
        Ok(())
    }
}
