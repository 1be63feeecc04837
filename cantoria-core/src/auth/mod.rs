//! Authentication for Cantoria
//!
//! A deliberately small identity story: a credential table seeded at startup
//! (no signup flow), argon2id password verification, and stateless session
//! tokens the client persists. Admin-only operations are gated on the role
//! carried by the session.
//!
//! # Submodules
//!
//! - `password`: Argon2id hashing and verification
//! - `session`: Session token creation and validation
//! - `middleware`: Axum session extraction and the admin gate

pub mod middleware;
pub mod password;
pub mod session;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::store::UserStore;
use std::sync::Arc;

/// A successful login: the public user view plus its session token
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The logged-in user (no password material)
    pub user: User,

    /// Signed session token for the client to persist
    pub token: String,
}

/// Checks credentials against the seeded table and issues sessions
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn UserStore>,
    secret: String,
}

impl Authenticator {
    /// Creates an authenticator over a user store
    pub fn new(users: Arc<dyn UserStore>, secret: impl Into<String>) -> Self {
        Self {
            users,
            secret: secret.into(),
        }
    }

    /// The session signing secret (for wiring the middleware)
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Verifies an email/password pair and issues a session
    ///
    /// Fails with [`Error::InvalidCredentials`] on any non-match; unknown
    /// email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let account = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        let matches = password::verify_password(password, &account.password_hash)
            .map_err(|e| Error::Storage(e.to_string()))?;
        if !matches {
            return Err(Error::InvalidCredentials);
        }

        let token = session::create_session_token(&account.user, &self.secret)
            .map_err(|e| Error::Storage(e.to_string()))?;

        tracing::info!(user_id = %account.user.id, "User logged in");

        Ok(LoginOutcome {
            user: account.user,
            token,
        })
    }
}
