use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::services::DEFAULT_PAGE_LIMIT;

fn default_true() -> bool {
    true
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Deserialize)]
pub struct ListUsersQuery {
    pub user_type_id: Option<i64>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Deserialize, Validate)]
pub struct CreateUserTypeRequest {
    #[validate(length(min = 3, max = 50, message = "name must be between 3 and 50 characters"))]
    pub name: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "first_name must be between 1 and 50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "last_name must be between 1 and 50 characters"))]
    pub last_name: String,
    #[validate(length(min = 1, max = 50, message = "username must be between 1 and 50 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(range(min = 1, message = "age must be a positive number"))]
    pub age: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub user_type_id: i64,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
#[validate(schema(function = validate_course_dates))]
pub struct CreateCourseRequest {
    #[validate(length(min = 3, max = 100, message = "name must be between 3 and 100 characters"))]
    pub name: String,
    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn validate_course_dates(req: &CreateCourseRequest) -> Result<(), ValidationError> {
    if req.end_date < req.start_date {
        let mut err = ValidationError::new("date_range");
        err.message = Some("End date must be later than the start date".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Deserialize, Validate)]
#[validate(schema(function = validate_enrollment_dates))]
pub struct CreateEnrollmentRequest {
    pub user_id: i64,
    pub course_id: i64,
    pub enrolled_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[validate(length(max = 255, message = "associative_data must be at most 255 characters"))]
    pub associative_data: Option<String>,
}

fn validate_enrollment_dates(req: &CreateEnrollmentRequest) -> Result<(), ValidationError> {
    if let Some(end_date) = req.end_date {
        if end_date < req.enrolled_date {
            let mut err = ValidationError::new("date_range");
            err.message = Some("End date must be later than the enrolled date".into());
            return Err(err);
        }
    }
    Ok(())
}
