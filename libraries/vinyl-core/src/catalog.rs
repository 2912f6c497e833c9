//! Catalog trait abstracting the persistence gateway

use crate::error::Result;
use crate::types::{Album, AlbumChanges, AlbumId, NewAlbum};
use async_trait::async_trait;

/// Catalog store providing access to album persistence operations
///
/// Default reads exclude soft-deleted rows; implementations expose no way
/// to reach a deleted album through this trait.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Get all non-deleted albums, ordered by id
    async fn list_albums(&self) -> Result<Vec<Album>>;

    /// Get album by ID
    async fn get_album(&self, id: AlbumId) -> Result<Option<Album>>;

    /// Create a new album
    async fn create_album(&self, album: NewAlbum) -> Result<Album>;

    /// Apply a partial update to an album
    async fn update_album(&self, id: AlbumId, changes: AlbumChanges) -> Result<Album>;

    /// Soft-delete an album
    async fn delete_album(&self, id: AlbumId) -> Result<()>;
}
