use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub age: Option<i32>,
    pub is_active: bool,
    pub user_type_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Service-level input: carries the plaintext password, which is hashed
/// through the `CredentialHasher` port before it reaches a repository.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub age: Option<i32>,
    pub is_active: bool,
    pub user_type_id: i64,
    pub password: String,
}

/// Persistence-ready insert form.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub age: Option<i32>,
    pub is_active: bool,
    pub user_type_id: i64,
    pub password_hash: String,
}
