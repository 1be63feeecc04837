//! Dashboard statistics endpoint
//!
//! # Endpoint
//!
//! ```text
//! GET /api/stats
//! ```
//!
//! # Response
//!
//! ```json
//! {
//!   "confirmations": { "confirmed": 1, "pending": 2 },
//!   "roster": {
//!     "by_instrument": { "Guitar": 1, "Piano": 1 },
//!     "by_period": { "evening": 1, "morning": 2 }
//!   }
//! }
//! ```

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use cantoria_core::services::agenda::{ConfirmationCounts, RosterCounts};
use serde::Serialize;

/// Combined dashboard statistics
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Confirmed vs pending assignments across all schedules
    pub confirmations: ConfirmationCounts,

    /// Roster composition by instrument and availability period
    pub roster: RosterCounts,
}

/// Statistics handler
pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    Ok(Json(StatsResponse {
        confirmations: state.agenda.confirmation_counts().await?,
        roster: state.agenda.roster_counts().await?,
    }))
}
