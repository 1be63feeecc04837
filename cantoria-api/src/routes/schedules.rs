//! Schedule ledger endpoints
//!
//! # Endpoints
//!
//! - `GET /api/schedules` - List all schedules, soonest first
//! - `GET /api/schedules/:id` - Fetch one schedule
//! - `GET /api/schedules/upcoming` - Upcoming events only
//! - `GET /api/schedules/past` - Past events only
//! - `GET /api/schedules/musician/:musician_id` - One musician's agenda
//! - `POST /api/schedules` - Create (admin)
//! - `PUT /api/schedules/:id` - Update event fields (admin)
//! - `DELETE /api/schedules/:id` - Delete (admin)
//! - `POST /api/schedules/:id/musicians` - Assign or re-instrument (admin)
//! - `DELETE /api/schedules/:id/musicians/:musician_id` - Unassign (admin)
//! - `PUT /api/schedules/:id/musicians/:musician_id/confirmation` - Set the flag (admin)
//! - `PUT /api/schedules/:id/songs` - Replace the song list (admin)

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use cantoria_core::auth::middleware::AdminContext;
use cantoria_core::models::schedule::{CreateSchedule, Schedule, UpdateSchedule};
use cantoria_core::models::{MusicianId, ScheduleId, SongId};
use cantoria_core::services::agenda::Partition;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Assign-musician request
#[derive(Debug, Serialize, Deserialize)]
pub struct AssignMusicianRequest {
    /// Musician to assign (must exist in the roster)
    pub musician_id: MusicianId,

    /// Instrument for this event
    pub instrument: String,
}

/// Confirmation request
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    /// New confirmation state
    pub confirmed: bool,
}

/// Replace-song-list request
#[derive(Debug, Serialize, Deserialize)]
pub struct SetSongsRequest {
    /// The new song list, in performance order
    ///
    /// Replaces the previous list entirely.
    pub song_ids: Vec<SongId>,
}

/// Lists all schedules, ordered by start instant
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Schedule>>> {
    Ok(Json(state.ledger.list().await?))
}

/// Fetches one schedule by id
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<ScheduleId>,
) -> ApiResult<Json<Schedule>> {
    Ok(Json(state.ledger.get(id).await?))
}

/// Lists upcoming schedules, soonest first
pub async fn upcoming(State(state): State<AppState>) -> ApiResult<Json<Vec<Schedule>>> {
    let partition = state.agenda.partition(Utc::now()).await?;
    Ok(Json(partition.upcoming))
}

/// Lists past schedules, most recent first
pub async fn past(State(state): State<AppState>) -> ApiResult<Json<Vec<Schedule>>> {
    let partition = state.agenda.partition(Utc::now()).await?;
    Ok(Json(partition.past))
}

/// One musician's agenda: their schedules split into upcoming and past
pub async fn for_musician(
    State(state): State<AppState>,
    Path(musician_id): Path<MusicianId>,
) -> ApiResult<Json<Partition>> {
    Ok(Json(
        state.agenda.for_musician(musician_id, Utc::now()).await?,
    ))
}

/// Creates a schedule (admin only)
pub async fn create(
    _admin: AdminContext,
    State(state): State<AppState>,
    Json(data): Json<CreateSchedule>,
) -> ApiResult<(StatusCode, Json<Schedule>)> {
    let schedule = state.ledger.create(data).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Merges a partial update into a schedule's event fields (admin only)
pub async fn update(
    _admin: AdminContext,
    State(state): State<AppState>,
    Path(id): Path<ScheduleId>,
    Json(data): Json<UpdateSchedule>,
) -> ApiResult<Json<Schedule>> {
    Ok(Json(state.ledger.update(id, data).await?))
}

/// Deletes a schedule (admin only)
pub async fn remove(
    _admin: AdminContext,
    State(state): State<AppState>,
    Path(id): Path<ScheduleId>,
) -> ApiResult<StatusCode> {
    state.ledger.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Assigns a musician, or changes their instrument if already assigned
///
/// Re-posting the same musician overwrites the instrument in place and keeps
/// the confirmation flag. This is the "change instrument" flow.
pub async fn assign_musician(
    _admin: AdminContext,
    State(state): State<AppState>,
    Path(id): Path<ScheduleId>,
    Json(req): Json<AssignMusicianRequest>,
) -> ApiResult<Json<Schedule>> {
    Ok(Json(
        state
            .ledger
            .assign_musician(id, req.musician_id, req.instrument)
            .await?,
    ))
}

/// Removes a musician's assignment (admin only)
pub async fn remove_musician(
    _admin: AdminContext,
    State(state): State<AppState>,
    Path((id, musician_id)): Path<(ScheduleId, MusicianId)>,
) -> ApiResult<Json<Schedule>> {
    Ok(Json(state.ledger.remove_musician(id, musician_id).await?))
}

/// Sets a musician's confirmation flag (admin only)
pub async fn confirm_attendance(
    _admin: AdminContext,
    State(state): State<AppState>,
    Path((id, musician_id)): Path<(ScheduleId, MusicianId)>,
    Json(req): Json<ConfirmationRequest>,
) -> ApiResult<Json<Schedule>> {
    Ok(Json(
        state
            .ledger
            .confirm_attendance(id, musician_id, req.confirmed)
            .await?,
    ))
}

/// Replaces the schedule's song list (admin only)
///
/// Replace, never union: the request body is the whole new list.
pub async fn set_songs(
    _admin: AdminContext,
    State(state): State<AppState>,
    Path(id): Path<ScheduleId>,
    Json(req): Json<SetSongsRequest>,
) -> ApiResult<Json<Schedule>> {
    Ok(Json(state.ledger.set_songs(id, req.song_ids).await?))
}
