//! Musician roster endpoints
//!
//! # Endpoints
//!
//! - `GET /api/musicians` - List the roster
//! - `GET /api/musicians/:id` - Fetch one musician
//! - `GET /api/musicians/user/:user_id` - Fetch the musician linked to a user
//! - `POST /api/musicians` - Create (admin)
//! - `PUT /api/musicians/:id` - Update (admin)
//! - `DELETE /api/musicians/:id` - Delete (admin; 409 while scheduled)

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use cantoria_core::auth::middleware::AdminContext;
use cantoria_core::models::musician::{CreateMusician, Musician, UpdateMusician};
use cantoria_core::models::{MusicianId, UserId};

/// Lists all musicians, ordered by name
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Musician>>> {
    Ok(Json(state.roster.list().await?))
}

/// Fetches one musician by id
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<MusicianId>,
) -> ApiResult<Json<Musician>> {
    Ok(Json(state.roster.get(id).await?))
}

/// Fetches the musician linked to a user account
///
/// 404s when no musician carries the link; the link is optional.
pub async fn for_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> ApiResult<Json<Musician>> {
    Ok(Json(state.roster.find_by_user(user_id).await?))
}

/// Creates a musician (admin only)
pub async fn create(
    _admin: AdminContext,
    State(state): State<AppState>,
    Json(data): Json<CreateMusician>,
) -> ApiResult<(StatusCode, Json<Musician>)> {
    let musician = state.roster.create(data).await?;
    Ok((StatusCode::CREATED, Json(musician)))
}

/// Merges a partial update into a musician (admin only)
pub async fn update(
    _admin: AdminContext,
    State(state): State<AppState>,
    Path(id): Path<MusicianId>,
    Json(data): Json<UpdateMusician>,
) -> ApiResult<Json<Musician>> {
    Ok(Json(state.roster.update(id, data).await?))
}

/// Deletes a musician (admin only)
///
/// Answers 409 while any schedule still references the musician.
pub async fn remove(
    _admin: AdminContext,
    State(state): State<AppState>,
    Path(id): Path<MusicianId>,
) -> ApiResult<StatusCode> {
    state.roster.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
