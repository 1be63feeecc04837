//! Authentication endpoints
//!
//! # Endpoints
//!
//! - `POST /api/auth/login` - Check seeded credentials, get a session token
//! - `GET /api/auth/me` - Read the current session back
//! - `POST /api/auth/logout` - Acknowledge logout (client discards the token)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, http::StatusCode, Json};
use cantoria_core::auth::middleware::AuthContext;
use cantoria_core::models::user::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The logged-in user (no password material)
    pub user: User,

    /// Session token for the client to persist and send as a bearer token
    pub token: String,
}

/// Login handler
///
/// Checks the presented credentials against the seeded table. Unknown email
/// and wrong password both answer 401 with the same message.
///
/// # Endpoint
///
/// ```text
/// POST /api/auth/login
/// Content-Type: application/json
///
/// { "email": "admin@cantoria.app", "password": "..." }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: No seeded credential matches
/// - `422 Unprocessable Entity`: Malformed email
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    req.validate()
        .map_err(|e| ApiError::ValidationError(crate::error::validation_details(&e)))?;

    let outcome = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        user: outcome.user,
        token: outcome.token,
    }))
}

/// Session echo handler
///
/// Returns the user view carried by the presented session token, the
/// server-side equivalent of reading the persisted session synchronously.
pub async fn me(auth: AuthContext) -> Json<User> {
    Json(auth.user)
}

/// Logout handler
///
/// Sessions are stateless, so there is nothing to clear server-side; the
/// client discards its stored token. Always succeeds.
pub async fn logout(_auth: AuthContext) -> StatusCode {
    StatusCode::NO_CONTENT
}
