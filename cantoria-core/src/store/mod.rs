//! Repository traits over entity storage
//!
//! Each entity collection sits behind its own async trait so storage is
//! swappable (in-memory, file, SQL) without touching the business rules in
//! [`crate::services`]. The traits expose raw collection primitives only;
//! validation and cross-entity rules live in the services.
//!
//! The only implementation in this crate is the in-memory one in [`memory`],
//! which applies a configurable fixed latency to every operation so callers
//! behave as they would against a remote backend.

pub mod memory;

use crate::error::Result;
use crate::models::musician::Musician;
use crate::models::schedule::Schedule;
use crate::models::song::Song;
use crate::models::user::UserAccount;
use crate::models::{MusicianId, ScheduleId, SongId, UserId};
use async_trait::async_trait;

/// Storage for seeded user accounts
///
/// Accounts carry the password hash and never leave the core crate; the
/// services hand out only the public [`crate::models::user::User`] view.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns all accounts
    async fn list(&self) -> Result<Vec<UserAccount>>;

    /// Looks up an account by id
    async fn get(&self, id: UserId) -> Result<Option<UserAccount>>;

    /// Looks up an account by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>>;

    /// Inserts a seeded account
    async fn insert(&self, account: UserAccount) -> Result<()>;
}

/// Storage for the musician roster
#[async_trait]
pub trait MusicianStore: Send + Sync {
    /// Returns all musicians
    async fn list(&self) -> Result<Vec<Musician>>;

    /// Looks up a musician by id
    async fn get(&self, id: MusicianId) -> Result<Option<Musician>>;

    /// Looks up the musician linked to a user account, if any
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Musician>>;

    /// Inserts a new musician
    async fn insert(&self, musician: Musician) -> Result<()>;

    /// Replaces a stored musician; returns false if the id is absent
    async fn update(&self, musician: Musician) -> Result<bool>;

    /// Removes a musician; returns false if the id is absent
    async fn remove(&self, id: MusicianId) -> Result<bool>;
}

/// Storage for the song repertoire
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Returns all songs
    async fn list(&self) -> Result<Vec<Song>>;

    /// Looks up a song by id
    async fn get(&self, id: SongId) -> Result<Option<Song>>;

    /// Inserts a new song
    async fn insert(&self, song: Song) -> Result<()>;

    /// Replaces a stored song; returns false if the id is absent
    async fn update(&self, song: Song) -> Result<bool>;

    /// Removes a song; returns false if the id is absent
    async fn remove(&self, id: SongId) -> Result<bool>;
}

/// Storage for the schedule ledger
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Returns all schedules
    async fn list(&self) -> Result<Vec<Schedule>>;

    /// Looks up a schedule by id
    async fn get(&self, id: ScheduleId) -> Result<Option<Schedule>>;

    /// Inserts a new schedule
    async fn insert(&self, schedule: Schedule) -> Result<()>;

    /// Replaces a stored schedule; returns false if the id is absent
    async fn update(&self, schedule: Schedule) -> Result<bool>;

    /// Removes a schedule; returns false if the id is absent
    async fn remove(&self, id: ScheduleId) -> Result<bool>;
}
