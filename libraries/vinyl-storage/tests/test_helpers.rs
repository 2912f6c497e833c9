//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations, constraints, and indexes.

use sqlx::SqlitePool;
use tempfile::TempDir;
use vinyl_core::types::*;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = vinyl_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        // Run migrations
        vinyl_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: Create a test album
pub async fn create_test_album(
    pool: &SqlitePool,
    title: &str,
    artist: &str,
    price: f64,
) -> AlbumId {
    let album = vinyl_storage::albums::create(
        pool,
        NewAlbum {
            title: title.to_string(),
            artist: artist.to_string(),
            price,
        },
    )
    .await
    .expect("Failed to create test album");

    album.id
}
