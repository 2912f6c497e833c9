//! Domain types

mod album;

pub use album::{Album, AlbumChanges, AlbumId, NewAlbum};
