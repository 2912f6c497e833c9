/// Core error types for Vinyl
use crate::types::AlbumId;
use thiserror::Error;

/// Result type alias using `VinylError`
pub type Result<T> = std::result::Result<T, VinylError>;

/// Core error type for Vinyl
#[derive(Error, Debug)]
pub enum VinylError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Album not found
    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumId),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl VinylError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for VinylError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
