/// Albums API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use vinyl_core::{
    catalog::CatalogStore,
    types::{Album, AlbumChanges, AlbumId, NewAlbum},
};

/// Wire-facing album projection
///
/// Store-maintained bookkeeping (timestamps, deletion marker) never leaves
/// the server; every handler produces responses through this shape.
#[derive(Debug, Serialize)]
pub struct AlbumResponse {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<Album> for AlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            id: album.id,
            title: album.title,
            artist: album.artist,
            price: album.price,
        }
    }
}

/// Parse the `:id` path parameter as an album id.
///
/// Returning an error here short-circuits the handler via `?`, so no side
/// effect can follow a malformed id.
fn parse_id(raw: &str) -> Result<AlbumId> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest("Invalid param passed".to_string()))
}

/// Unwrap a JSON body extraction, normalizing every rejection
/// (syntax error, missing field, wrong type, missing content type) to 400.
fn parse_body<T>(body: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(_) => Err(ServerError::BadRequest("Invalid JSON format".to_string())),
    }
}

/// GET /albums
/// List all non-deleted albums
pub async fn list_albums(State(app_state): State<AppState>) -> Result<Json<Vec<AlbumResponse>>> {
    let albums = app_state.db.list_albums().await?;
    Ok(Json(albums.into_iter().map(AlbumResponse::from).collect()))
}

/// GET /albums/:id
/// Fetch one album by id
pub async fn get_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<AlbumResponse>> {
    let id = parse_id(&id)?;
    let album = app_state
        .db
        .get_album(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Could not find album".to_string()))?;

    Ok(Json(album.into()))
}

/// POST /albums
/// Create a new album
pub async fn create_album(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<NewAlbum>, JsonRejection>,
) -> Result<(StatusCode, Json<AlbumResponse>)> {
    let new_album = parse_body(body)?;
    let album = app_state.db.create_album(new_album).await?;
    Ok((StatusCode::CREATED, Json(album.into())))
}

/// PATCH /albums/:id
/// Apply a partial update; omitted fields are left untouched
pub async fn update_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: std::result::Result<Json<AlbumChanges>, JsonRejection>,
) -> Result<Json<AlbumResponse>> {
    let id = parse_id(&id)?;
    let changes = parse_body(body)?;
    let album = app_state.db.update_album(id, changes).await?;
    Ok(Json(album.into()))
}

/// DELETE /albums/:id
/// Soft-delete an album by id
pub async fn delete_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let id = parse_id(&id)?;
    app_state.db.delete_album(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Album deleted successfully",
        "id": id,
    })))
}
