use crate::albums;
use async_trait::async_trait;
use sqlx::SqlitePool;
use vinyl_core::{catalog::CatalogStore, error::Result, types::*};

/// Catalog store backed by `SQLite`
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    async fn list_albums(&self) -> Result<Vec<Album>> {
        albums::list(&self.pool).await
    }

    async fn get_album(&self, id: AlbumId) -> Result<Option<Album>> {
        albums::get_by_id(&self.pool, id).await
    }

    async fn create_album(&self, album: NewAlbum) -> Result<Album> {
        albums::create(&self.pool, album).await
    }

    async fn update_album(&self, id: AlbumId, changes: AlbumChanges) -> Result<Album> {
        albums::update(&self.pool, id, changes).await
    }

    async fn delete_album(&self, id: AlbumId) -> Result<()> {
        albums::soft_delete(&self.pool, id).await
    }
}
