//! Health check endpoint
//!
//! # Endpoint
//!
//! ```text
//! GET /health
//! ```
//!
//! # Response
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "musicians": 3,
//!   "songs": 3,
//!   "schedules": 2
//! }
//! ```

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Musicians in the roster
    pub musicians: usize,

    /// Songs in the repertoire
    pub songs: usize,

    /// Schedules in the ledger
    pub schedules: usize,
}

/// Health check handler
///
/// Touches every registry, so a healthy response also proves the stores
/// answer within their simulated latency.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let musicians = state.roster.list().await?.len();
    let songs = state.repertoire.list().await?.len();
    let schedules = state.ledger.list().await?.len();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        musicians,
        songs,
        schedules,
    }))
}
