//! Vinyl Core
//!
//! Domain types, the catalog trait, and error handling for the Vinyl
//! album catalog service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `NewAlbum`, `AlbumChanges`
//! - **Core Traits**: `CatalogStore`
//! - **Error Handling**: Unified `VinylError` and `Result` types

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::CatalogStore;
pub use error::{Result, VinylError};
pub use types::{Album, AlbumChanges, AlbumId, NewAlbum};
