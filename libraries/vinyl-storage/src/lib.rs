//! Vinyl Storage
//!
//! `SQLite` persistence layer for the Vinyl album catalog.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the albums slice owns its own queries and logic
//! - **Soft Deletes**: rows are marked, never physically removed; default
//!   reads exclude marked rows
//!
//! # Example
//!
//! ```rust,no_run
//! use vinyl_storage::{SqliteCatalog, create_pool, run_migrations};
//! use vinyl_core::CatalogStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://vinyl.db").await?;
//! run_migrations(&pool).await?;
//!
//! let catalog = SqliteCatalog::new(pool);
//!
//! // Get all albums
//! let albums = catalog.list_albums().await?;
//! # Ok(())
//! # }
//! ```

mod context;

// Vertical slices
pub mod albums;

pub use context::SqliteCatalog;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://vinyl.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
