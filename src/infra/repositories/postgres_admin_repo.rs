use crate::domain::ports::AdminRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

pub struct PostgresAdminRepo {
    pool: PgPool,
}

impl PostgresAdminRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepo {
    async fn truncate_all(&self) -> Result<(), AppError> {
        sqlx::query("TRUNCATE user_types, users, courses, enrollments RESTART IDENTITY CASCADE")
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        info!("Truncated all tables");
        Ok(())
    }
}
