use campus_backend::{
    api::router::create_router,
    config::Config,
    infra::factory::assemble_state,
    infra::repositories::{
        sqlite_admin_repo::SqliteAdminRepo,
        sqlite_course_repo::SqliteCourseRepo,
        sqlite_enrollment_repo::SqliteEnrollmentRepo,
        sqlite_user_repo::SqliteUserRepo,
        sqlite_user_type_repo::SqliteUserTypeRepo,
    },
    state::AppState,
};
use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            seed_on_startup: false,
        };

        let state = Arc::new(assemble_state(
            config,
            Arc::new(SqliteUserTypeRepo::new(pool.clone())),
            Arc::new(SqliteUserRepo::new(pool.clone())),
            Arc::new(SqliteCourseRepo::new(pool.clone())),
            Arc::new(SqliteEnrollmentRepo::new(pool.clone())),
            Arc::new(SqliteAdminRepo::new(pool.clone())),
        ));

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
