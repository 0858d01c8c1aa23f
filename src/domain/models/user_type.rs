use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct UserType {
    pub user_type_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert form. The id and timestamps are generated at persistence time.
#[derive(Debug, Clone)]
pub struct NewUserType {
    pub name: String,
}
