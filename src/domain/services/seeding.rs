use chrono::NaiveDate;
use tracing::info;

use crate::domain::models::course::NewCourse;
use crate::domain::models::enrollment::NewEnrollment;
use crate::domain::models::user::CreateUser;
use crate::domain::models::user_type::NewUserType;
use crate::error::AppError;
use crate::state::AppState;

/// Populates the default demo records in dependency order. Each step is
/// skipped when its table already holds rows, so repeated calls are no-ops.
pub async fn seed_defaults(state: &AppState) -> Result<(), AppError> {
    seed_user_types(state).await?;
    seed_users(state).await?;
    seed_courses(state).await?;
    seed_enrollments(state).await?;
    Ok(())
}

async fn seed_user_types(state: &AppState) -> Result<(), AppError> {
    if state.user_type_service.count().await? != 0 {
        return Ok(());
    }

    for name in ["Admin", "Student"] {
        state
            .user_type_service
            .create(NewUserType { name: name.to_string() })
            .await?;
    }

    info!("Seeded default user types");
    Ok(())
}

async fn seed_users(state: &AppState) -> Result<(), AppError> {
    if state.user_service.count().await? != 0 {
        return Ok(());
    }

    // Seeded rows resolve their type by name rather than assuming ids.
    let admin_type = state.user_type_service.get_by_name("Admin").await?;
    let student_type = state.user_type_service.get_by_name("Student").await?;

    let defaults = [
        ("Safet", "Imamovic", "admin", "safet.imamovic@example.com", 21, admin_type.user_type_id, "admin"),
        ("John", "Doe", "johndoe123", "john.doe@example.com", 21, student_type.user_type_id, "password1"),
        ("Jane", "Smith", "janedoe69", "jane.smith@example.com", 22, student_type.user_type_id, "password2"),
    ];

    for (first_name, last_name, username, email, age, user_type_id, password) in defaults {
        state
            .user_service
            .create(CreateUser {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                username: username.to_string(),
                email: email.to_string(),
                age: Some(age),
                is_active: true,
                user_type_id,
                password: password.to_string(),
            })
            .await?;
    }

    info!("Seeded default users");
    Ok(())
}

async fn seed_courses(state: &AppState) -> Result<(), AppError> {
    if state.course_service.count().await? != 0 {
        return Ok(());
    }

    let term_start = NaiveDate::from_ymd_opt(2024, 8, 17).expect("valid seed date");
    let term_end = NaiveDate::from_ymd_opt(2024, 12, 20).expect("valid seed date");

    let defaults = [
        ("Python 101", "Basic Python"),
        ("Databases 101", "Relational database fundamentals"),
    ];

    for (name, description) in defaults {
        state
            .course_service
            .create(NewCourse {
                name: name.to_string(),
                description: Some(description.to_string()),
                start_date: term_start,
                end_date: term_end,
                is_active: true,
            })
            .await?;
    }

    info!("Seeded default courses");
    Ok(())
}

async fn seed_enrollments(state: &AppState) -> Result<(), AppError> {
    if state.enrollment_service.count().await? != 0 {
        return Ok(());
    }

    let john = state.user_service.get_by_email("john.doe@example.com").await?;
    let jane = state.user_service.get_by_email("jane.smith@example.com").await?;
    let python = state.course_service.get_by_name("Python 101").await?;
    let databases = state.course_service.get_by_name("Databases 101").await?;

    let enrolled = NaiveDate::from_ymd_opt(2024, 8, 17).expect("valid seed date");

    let defaults = [
        (john.user_id, python.course_id, "John in Python 101"),
        (john.user_id, databases.course_id, "John in Databases 101"),
        (jane.user_id, python.course_id, "Jane in Python 101"),
    ];

    for (user_id, course_id, note) in defaults {
        state
            .enrollment_service
            .create(NewEnrollment {
                user_id,
                course_id,
                enrolled_date: enrolled,
                end_date: None,
                associative_data: Some(note.to_string()),
            })
            .await?;
    }

    info!("Seeded default enrollments");
    Ok(())
}
