//! Session authentication middleware for axum
//!
//! Extracts the bearer token from the Authorization header, validates it, and
//! adds an [`AuthContext`] to the request extensions. Handlers take
//! `AuthContext` as an extractor; mutating handlers take [`AdminContext`]
//! instead, which additionally rejects non-admin sessions with 403.
//!
//! # Example
//!
//! ```no_run
//! use axum::{middleware, routing::{get, post}, Router};
//! use cantoria_core::auth::middleware::{authenticate, AdminContext, AuthContext};
//!
//! async fn who_am_i(auth: AuthContext) -> String {
//!     format!("Hello, {}!", auth.user.name)
//! }
//!
//! async fn mutate(admin: AdminContext) -> String {
//!     format!("Done, {}", admin.user.name)
//! }
//!
//! let secret = "a-secret-key-of-at-least-32-bytes!!".to_string();
//! let app: Router = Router::new()
//!     .route("/me", get(who_am_i))
//!     .route("/mutate", post(mutate))
//!     .layer(middleware::from_fn(move |req, next| {
//!         authenticate(secret.clone(), req, next)
//!     }));
//! ```

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::session::{validate_session_token, SessionError};
use crate::models::user::{Role, User};

/// Authentication context added to request extensions
///
/// Present on every request that passed the session middleware.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The authenticated user's public view, as carried by the token
    pub user: User,
}

impl AuthContext {
    /// Whether the session belongs to an admin
    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AuthError::MissingCredentials)
    }
}

/// Error type for authentication middleware
#[derive(Debug)]
pub enum AuthError {
    /// Missing authorization header
    MissingCredentials,

    /// Invalid authorization header format
    InvalidFormat(String),

    /// Token validation failed
    InvalidToken(String),

    /// Authenticated but not an admin
    AdminRequired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::MissingCredentials => {
                (StatusCode::UNAUTHORIZED, "Missing credentials").into_response()
            }
            AuthError::InvalidFormat(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AuthError::InvalidToken(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            AuthError::AdminRequired => {
                (StatusCode::FORBIDDEN, "Admin role required").into_response()
            }
        }
    }
}

/// Extracts the bearer token from an Authorization header value
fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::InvalidFormat("Authorization header is not valid UTF-8".to_string()))?;

    header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidFormat("Expected 'Bearer <token>'".to_string()))
}

/// Session middleware: validates the bearer token and attaches [`AuthContext`]
///
/// Wire with `axum::middleware::from_fn` and a captured secret, or from the
/// server's state via `from_fn_with_state`.
pub async fn authenticate(
    secret: String,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (parts, body) = req.into_parts();
    let token = bearer_token(&parts)?;

    let claims = validate_session_token(token, &secret).map_err(|e| match e {
        SessionError::Expired => AuthError::InvalidToken("Session has expired".to_string()),
        other => AuthError::InvalidToken(other.to_string()),
    })?;

    req = Request::from_parts(parts, body);
    req.extensions_mut().insert(AuthContext {
        user: claims.user(),
    });

    Ok(next.run(req).await)
}

/// Authentication context that additionally requires the admin role
///
/// Extracting this in a handler gates the route: member sessions are
/// rejected with 403 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AdminContext {
    /// The authenticated admin's public view
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let ctx = AuthContext::from_request_parts(parts, state).await?;
        if !ctx.is_admin() {
            return Err(AuthError::AdminRequired);
        }
        Ok(AdminContext { user: ctx.user })
    }
}
