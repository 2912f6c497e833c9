/// Common test utilities and fixtures
use axum::Router;
use std::sync::Arc;
use tempfile::TempDir;
use vinyl_server::{api, state::AppState};
use vinyl_storage::SqliteCatalog;

/// Test application wrapper
///
/// Holds the temp dir so the database file outlives the router.
pub struct TestApp {
    pub router: Router,
    _temp_dir: TempDir,
}

/// Create a test app backed by a real SQLite file with migrations applied
pub async fn create_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = vinyl_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    vinyl_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let db = Arc::new(SqliteCatalog::new(pool));
    let router = api::router(AppState::new(db));

    TestApp {
        router,
        _temp_dir: temp_dir,
    }
}
