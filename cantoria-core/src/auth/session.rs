//! Session token generation and validation
//!
//! A session token is a signed, self-contained copy of the logged-in user's
//! public view (id, email, name, role, never the password hash) that the
//! client persists and presents on every request. The server keeps no session
//! state of its own.
//!
//! Tokens are HS256-signed and expire after 24 hours. There is exactly one
//! token type; logout is the client discarding its copy.
//!
//! # Example
//!
//! ```
//! use cantoria_core::auth::session::{create_session_token, validate_session_token, Claims};
//! use cantoria_core::models::user::{Role, User};
//! use cantoria_core::models::UserId;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let user = User {
//!     id: UserId::new(),
//!     email: "admin@cantoria.app".to_string(),
//!     name: "Admin".to_string(),
//!     role: Role::Admin,
//! };
//!
//! let secret = "a-test-secret-key-of-at-least-32-bytes";
//! let token = create_session_token(&user, secret)?;
//! let claims = validate_session_token(&token, secret)?;
//! assert_eq!(claims.sub, user.id);
//! assert_eq!(claims.user(), user);
//! # Ok(())
//! # }
//! ```

use crate::models::user::{Role, User};
use crate::models::UserId;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token issuer claim value
const ISSUER: &str = "cantoria";

/// Session lifetime
fn session_ttl() -> Duration {
    Duration::hours(24)
}

/// Error type for session token operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Token has expired
    #[error("Session has expired")]
    Expired,

    /// Token failed signature or claim validation
    #[error("Invalid session token: {0}")]
    Invalid(String),
}

/// Session token claims
///
/// Standard claims (`sub`, `iss`, `iat`, `exp`) plus the user view fields the
/// client needs without a round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user ID
    pub sub: UserId,

    /// Issuer - always "cantoria"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// User email (custom claim)
    pub email: String,

    /// User display name (custom claim)
    pub name: String,

    /// User role (custom claim)
    pub role: Role,
}

impl Claims {
    /// Creates claims for a user with the default session lifetime
    pub fn new(user: &User) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + session_ttl()).timestamp(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }

    /// Rebuilds the public user view carried by the token
    pub fn user(&self) -> User {
        User {
            id: self.sub,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// Signs a session token for a user
///
/// # Errors
///
/// Returns `SessionError::CreateError` if encoding fails
pub fn create_session_token(user: &User, secret: &str) -> Result<String, SessionError> {
    let claims = Claims::new(user);
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| SessionError::CreateError(e.to_string()))
}

/// Validates a session token and returns its claims
///
/// Checks signature, expiration, and issuer.
///
/// # Errors
///
/// - `SessionError::Expired` when the token's `exp` has passed
/// - `SessionError::Invalid` for any other validation failure
pub fn validate_session_token(token: &str, secret: &str) -> Result<Claims, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        _ => SessionError::Invalid(e.to_string()),
    })
}
