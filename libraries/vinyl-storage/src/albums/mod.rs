use sqlx::{Row, SqlitePool};
use vinyl_core::{error::Result, types::*, VinylError};

pub async fn list(pool: &SqlitePool) -> Result<Vec<Album>> {
    let rows = sqlx::query(
        "SELECT id, title, artist, price, created_at, updated_at, deleted_at
         FROM albums
         WHERE deleted_at IS NULL
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Album {
            id: row.get("id"),
            title: row.get("title"),
            artist: row.get("artist"),
            price: row.get("price"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
            deleted_at: row.get("deleted_at"),
        })
        .collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: AlbumId) -> Result<Option<Album>> {
    let row = sqlx::query(
        "SELECT id, title, artist, price, created_at, updated_at, deleted_at
         FROM albums
         WHERE id = ? AND deleted_at IS NULL",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| Album {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        price: row.get("price"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        deleted_at: row.get("deleted_at"),
    }))
}

/// Fetch by id including soft-deleted rows (audit/recovery use)
pub async fn get_by_id_unscoped(pool: &SqlitePool, id: AlbumId) -> Result<Option<Album>> {
    let row = sqlx::query(
        "SELECT id, title, artist, price, created_at, updated_at, deleted_at
         FROM albums
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| Album {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        price: row.get("price"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        deleted_at: row.get("deleted_at"),
    }))
}

pub async fn create(pool: &SqlitePool, album: NewAlbum) -> Result<Album> {
    let result = sqlx::query(
        "INSERT INTO albums (title, artist, price)
         VALUES (?, ?, ?)",
    )
    .bind(&album.title)
    .bind(&album.artist)
    .bind(album.price)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| VinylError::storage("Failed to retrieve created album"))
}

/// Apply a partial update to a non-deleted album.
///
/// Only the fields present in `changes` are written; `updated_at` is always
/// refreshed. The UPDATE and the re-read run in one transaction and the
/// UPDATE is conditional on `deleted_at IS NULL`, so a concurrent delete
/// cannot slip between a lookup and the mutation.
pub async fn update(pool: &SqlitePool, id: AlbumId, changes: AlbumChanges) -> Result<Album> {
    if changes.is_empty() {
        // Nothing to write; still report not-found for unknown/deleted ids
        return get_by_id(pool, id)
            .await?
            .ok_or(VinylError::AlbumNotFound(id));
    }

    let mut query_parts = Vec::new();

    if changes.title.is_some() {
        query_parts.push("title = ?");
    }
    if changes.artist.is_some() {
        query_parts.push("artist = ?");
    }
    if changes.price.is_some() {
        query_parts.push("price = ?");
    }

    query_parts.push("updated_at = datetime('now')");

    let query_str = format!(
        "UPDATE albums SET {} WHERE id = ? AND deleted_at IS NULL",
        query_parts.join(", ")
    );

    let mut tx = pool.begin().await?;

    let mut query = sqlx::query(&query_str);

    if let Some(title) = &changes.title {
        query = query.bind(title);
    }
    if let Some(artist) = &changes.artist {
        query = query.bind(artist);
    }
    if let Some(price) = changes.price {
        query = query.bind(price);
    }
    query = query.bind(id);

    let result = query.execute(&mut *tx).await?;

    if result.rows_affected() == 0 {
        return Err(VinylError::AlbumNotFound(id));
    }

    let row = sqlx::query(
        "SELECT id, title, artist, price, created_at, updated_at, deleted_at
         FROM albums
         WHERE id = ? AND deleted_at IS NULL",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let album = row
        .map(|row| Album {
            id: row.get("id"),
            title: row.get("title"),
            artist: row.get("artist"),
            price: row.get("price"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
            deleted_at: row.get("deleted_at"),
        })
        .ok_or(VinylError::AlbumNotFound(id))?;

    tx.commit().await?;

    Ok(album)
}

/// Soft-delete an album.
///
/// A single conditional UPDATE sets the marker; zero affected rows means the
/// id is unknown or already deleted, so a second delete reports not-found.
pub async fn soft_delete(pool: &SqlitePool, id: AlbumId) -> Result<()> {
    let result = sqlx::query(
        "UPDATE albums
         SET deleted_at = datetime('now'), updated_at = datetime('now')
         WHERE id = ? AND deleted_at IS NULL",
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(VinylError::AlbumNotFound(id));
    }

    Ok(())
}
