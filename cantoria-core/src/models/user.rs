//! User accounts and roles
//!
//! Users exist only for login and role checks. They are created at seed time;
//! there is no signup flow, and nothing else references them except a
//! musician's optional `user_id` link.

use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// User role, gating admin-only operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including all mutating operations
    Admin,

    /// Read access to rosters, repertoire, and schedules
    Member,
}

impl Role {
    /// Gets role as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }
}

/// Public view of a user account
///
/// This is what login returns and what the session token carries. It never
/// includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: UserId,

    /// Email address, unique among seeded accounts
    pub email: String,

    /// Display name
    pub name: String,

    /// Role (admin or member)
    pub role: Role,
}

/// A seeded credential table entry
///
/// Holds the public user view plus its argon2id password hash. Accounts stay
/// inside the user store; only the inner [`User`] ever leaves the core crate.
#[derive(Debug, Clone)]
pub struct UserAccount {
    /// Public user view
    pub user: User,

    /// Argon2id password hash (PHC string format)
    pub password_hash: String,
}
