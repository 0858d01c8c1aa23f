use crate::domain::ports::AdminRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::info;

pub struct SqliteAdminRepo {
    pool: SqlitePool,
}

impl SqliteAdminRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for SqliteAdminRepo {
    async fn truncate_all(&self) -> Result<(), AppError> {
        // Children before parents. Id generation restarts on its own: the
        // tables use plain rowid keys, not AUTOINCREMENT.
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        for table in ["enrollments", "users", "courses", "user_types"] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        info!("Truncated all tables");
        Ok(())
    }
}
