//! Album types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type AlbumId = i64;

/// An album as persisted, including store-maintained bookkeeping columns.
///
/// `deleted_at` carries the soft-delete marker: a `Some` value removes the
/// row from default reads while keeping it on disk for audit/recovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Data for creating a new album
///
/// All fields are required; a body missing any of them does not deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Partial update for an album
///
/// Fields left as `None` are never written, so a client that omits a field
/// cannot accidentally zero it out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumChanges {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub price: Option<f64>,
}

impl AlbumChanges {
    /// Returns true when no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.artist.is_none() && self.price.is_none()
    }
}
