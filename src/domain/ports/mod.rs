use crate::domain::models::{
    course::{Course, NewCourse},
    enrollment::{Enrollment, NewEnrollment},
    user::{NewUser, User},
    user_type::{NewUserType, UserType},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserTypeRepository: Send + Sync {
    async fn count(&self) -> Result<i64, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<UserType>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<UserType>, AppError>;
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<UserType>, AppError>;
    async fn create(&self, user_type: &NewUserType) -> Result<UserType, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> Result<i64, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn list(&self, user_type_id: Option<i64>, skip: i64, limit: i64) -> Result<Vec<User>, AppError>;
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;
    async fn set_active(&self, id: i64, active: bool) -> Result<User, AppError>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn count(&self) -> Result<i64, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, AppError>;
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Course>, AppError>;
    async fn create(&self, course: &NewCourse) -> Result<Course, AppError>;
    async fn set_active(&self, id: i64, active: bool) -> Result<Course, AppError>;
}

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn count(&self) -> Result<i64, AppError>;
    async fn find(&self, user_id: i64, course_id: i64) -> Result<Option<Enrollment>, AppError>;
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Enrollment>, AppError>;
    async fn create(&self, enrollment: &NewEnrollment) -> Result<Enrollment, AppError>;
    async fn delete(&self, user_id: i64, course_id: i64) -> Result<(), AppError>;
}

/// Maintenance operations that cut across all four tables.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Empties every table (children first) in one transaction and resets
    /// identity generation so reseeded records start over from id 1.
    async fn truncate_all(&self) -> Result<(), AppError>;
}

/// One-way credential transform applied before a password is stored.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AppError>;
}
