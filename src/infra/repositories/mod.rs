pub mod sqlite_admin_repo;
pub mod sqlite_course_repo;
pub mod sqlite_enrollment_repo;
pub mod sqlite_user_repo;
pub mod sqlite_user_type_repo;

pub mod postgres_admin_repo;
pub mod postgres_course_repo;
pub mod postgres_enrollment_repo;
pub mod postgres_user_repo;
pub mod postgres_user_type_repo;
