use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::ports::{
    AdminRepository, CourseRepository, CredentialHasher, EnrollmentRepository, UserRepository,
    UserTypeRepository,
};
use crate::domain::services::course_service::CourseService;
use crate::domain::services::enrollment_service::EnrollmentService;
use crate::domain::services::user_service::UserService;
use crate::domain::services::user_type_service::UserTypeService;
use crate::infra::repositories::{
    postgres_admin_repo::PostgresAdminRepo, postgres_course_repo::PostgresCourseRepo,
    postgres_enrollment_repo::PostgresEnrollmentRepo, postgres_user_repo::PostgresUserRepo,
    postgres_user_type_repo::PostgresUserTypeRepo, sqlite_admin_repo::SqliteAdminRepo,
    sqlite_course_repo::SqliteCourseRepo, sqlite_enrollment_repo::SqliteEnrollmentRepo,
    sqlite_user_repo::SqliteUserRepo, sqlite_user_type_repo::SqliteUserTypeRepo,
};
use crate::infra::security::argon2_hasher::Argon2Hasher;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        assemble_state(
            config.clone(),
            Arc::new(PostgresUserTypeRepo::new(pool.clone())),
            Arc::new(PostgresUserRepo::new(pool.clone())),
            Arc::new(PostgresCourseRepo::new(pool.clone())),
            Arc::new(PostgresEnrollmentRepo::new(pool.clone())),
            Arc::new(PostgresAdminRepo::new(pool)),
        )
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true)
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        assemble_state(
            config.clone(),
            Arc::new(SqliteUserTypeRepo::new(pool.clone())),
            Arc::new(SqliteUserRepo::new(pool.clone())),
            Arc::new(SqliteCourseRepo::new(pool.clone())),
            Arc::new(SqliteEnrollmentRepo::new(pool.clone())),
            Arc::new(SqliteAdminRepo::new(pool)),
        )
    }
}

pub fn assemble_state(
    config: Config,
    user_type_repo: Arc<dyn UserTypeRepository>,
    user_repo: Arc<dyn UserRepository>,
    course_repo: Arc<dyn CourseRepository>,
    enrollment_repo: Arc<dyn EnrollmentRepository>,
    admin_repo: Arc<dyn AdminRepository>,
) -> AppState {
    let hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2Hasher);

    let user_type_service = Arc::new(UserTypeService::new(user_type_repo.clone()));
    let user_service = Arc::new(UserService::new(
        user_repo.clone(),
        user_type_repo,
        hasher,
    ));
    let course_service = Arc::new(CourseService::new(course_repo.clone()));
    let enrollment_service = Arc::new(EnrollmentService::new(
        enrollment_repo,
        user_repo,
        course_repo,
    ));

    AppState {
        config,
        user_type_service,
        user_service,
        course_service,
        enrollment_service,
        admin_repo,
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
