use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Junction record. Its identity is the (user_id, course_id) pair; there is
/// no surrogate key.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Enrollment {
    pub user_id: i64,
    pub course_id: i64,
    pub enrolled_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub associative_data: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEnrollment {
    pub user_id: i64,
    pub course_id: i64,
    pub enrolled_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub associative_data: Option<String>,
}
