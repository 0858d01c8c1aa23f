use crate::domain::{models::user::{NewUser, User}, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

const USER_COLUMNS: &str = "user_id, first_name, last_name, username, email, password_hash, age, is_active, user_type_id, created_at, updated_at, last_login";

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = ?"
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, user_type_id: Option<i64>, skip: i64, limit: i64) -> Result<Vec<User>, AppError> {
        match user_type_id {
            Some(type_id) => sqlx::query_as::<_, User>(&format!(
                "SELECT {USER_COLUMNS} FROM users WHERE user_type_id = ? ORDER BY user_id ASC LIMIT ? OFFSET ?"
            ))
                .bind(type_id)
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database),
            None => sqlx::query_as::<_, User>(&format!(
                "SELECT {USER_COLUMNS} FROM users ORDER BY user_id ASC LIMIT ? OFFSET ?"
            ))
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database),
        }
    }

    async fn create(&self, user: &NewUser) -> Result<User, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (first_name, last_name, username, email, password_hash, age, is_active, user_type_id, created_at, updated_at, last_login) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {USER_COLUMNS}"
        ))
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
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET is_active = ?, updated_at = ? WHERE user_id = ? RETURNING {USER_COLUMNS}"
        ))
            .bind(active)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }
}
