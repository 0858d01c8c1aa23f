use crate::domain::{models::user::{NewUser, User}, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepo {
    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, user_type_id: Option<i64>, skip: i64, limit: i64) -> Result<Vec<User>, AppError> {
        match user_type_id {
            Some(type_id) => sqlx::query_as::<_, User>(
                "SELECT * FROM users WHERE user_type_id = $1 ORDER BY user_id ASC LIMIT $2 OFFSET $3",
            )
                .bind(type_id)
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database),
            None => sqlx::query_as::<_, User>(
                "SELECT * FROM users ORDER BY user_id ASC LIMIT $1 OFFSET $2",
            )
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database),
        }
    }

    async fn create(&self, user: &NewUser) -> Result<User, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, username, email, password_hash, age, is_active, user_type_id, created_at, updated_at, last_login) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
        )
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.age)
            .bind(user.is_active)
            .bind(user.user_type_id)
            .bind(now)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET is_active = $1, updated_at = $2 WHERE user_id = $3 RETURNING *",
        )
            .bind(active)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }
}
