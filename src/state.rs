use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::AdminRepository;
use crate::domain::services::course_service::CourseService;
use crate::domain::services::enrollment_service::EnrollmentService;
use crate::domain::services::user_service::UserService;
use crate::domain::services::user_type_service::UserTypeService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_type_service: Arc<UserTypeService>,
    pub user_service: Arc<UserService>,
    pub course_service: Arc<CourseService>,
    pub enrollment_service: Arc<EnrollmentService>,
    pub admin_repo: Arc<dyn AdminRepository>,
}
