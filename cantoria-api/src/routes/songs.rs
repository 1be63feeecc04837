//! Song repertoire endpoints
//!
//! # Endpoints
//!
//! - `GET /api/songs` - List the repertoire
//! - `GET /api/songs/:id` - Fetch one song
//! - `POST /api/songs` - Create (admin)
//! - `PUT /api/songs/:id` - Update (admin)
//! - `DELETE /api/songs/:id` - Delete (admin; 409 while listed on a schedule)

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use cantoria_core::auth::middleware::AdminContext;
use cantoria_core::models::song::{CreateSong, Song, UpdateSong};
use cantoria_core::models::SongId;

/// Lists all songs, ordered by title
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Song>>> {
    Ok(Json(state.repertoire.list().await?))
}

/// Fetches one song by id
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<SongId>,
) -> ApiResult<Json<Song>> {
    Ok(Json(state.repertoire.get(id).await?))
}

/// Creates a song (admin only)
pub async fn create(
    _admin: AdminContext,
    State(state): State<AppState>,
    Json(data): Json<CreateSong>,
) -> ApiResult<(StatusCode, Json<Song>)> {
    let song = state.repertoire.create(data).await?;
    Ok((StatusCode::CREATED, Json(song)))
}

/// Merges a partial update into a song (admin only)
pub async fn update(
    _admin: AdminContext,
    State(state): State<AppState>,
    Path(id): Path<SongId>,
    Json(data): Json<UpdateSong>,
) -> ApiResult<Json<Song>> {
    Ok(Json(state.repertoire.update(id, data).await?))
}

/// Deletes a song (admin only)
///
/// Answers 409 while any schedule still lists the song.
pub async fn remove(
    _admin: AdminContext,
    State(state): State<AppState>,
    Path(id): Path<SongId>,
) -> ApiResult<StatusCode> {
    state.repertoire.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
