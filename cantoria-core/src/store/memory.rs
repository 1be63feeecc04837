//! In-memory store implementations
//!
//! Each store is a `tokio::sync::RwLock<HashMap>` behind the matching
//! repository trait. A configurable fixed latency is awaited at the top of
//! every operation, standing in for the round trip a real backend would cost.
//! The latency defaults to zero; tests that exercise it run under
//! `tokio::time::pause` so no wall-clock time passes.
//!
//! Single-writer semantics: there is one logical connection to each store,
//! so operations observe an immediately-visible last-writer-wins order.

use crate::error::Result;
use crate::models::musician::Musician;
use crate::models::schedule::Schedule;
use crate::models::song::Song;
use crate::models::user::UserAccount;
use crate::models::{MusicianId, ScheduleId, SongId, UserId};
use crate::store::{MusicianStore, ScheduleStore, SongStore, UserStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;
use tokio::sync::RwLock;

/// Generic in-memory table shared by the entity stores
struct Table<Id, T> {
    rows: RwLock<HashMap<Id, T>>,
    latency: Duration,
}

impl<Id, T> Table<Id, T>
where
    Id: Eq + Hash + Copy,
    T: Clone,
{
    fn new(latency: Duration) -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            latency,
        }
    }

    /// Models the round trip to the pretend backend
    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn list(&self) -> Vec<T> {
        self.round_trip().await;
        self.rows.read().await.values().cloned().collect()
    }

    async fn get(&self, id: Id) -> Option<T> {
        self.round_trip().await;
        self.rows.read().await.get(&id).cloned()
    }

    async fn insert(&self, id: Id, row: T) {
        self.round_trip().await;
        self.rows.write().await.insert(id, row);
    }

    /// Replaces an existing row; returns false when the id is absent
    async fn update(&self, id: Id, row: T) -> bool {
        self.round_trip().await;
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    async fn remove(&self, id: Id) -> bool {
        self.round_trip().await;
        self.rows.write().await.remove(&id).is_some()
    }
}

macro_rules! memory_store {
    ($(#[$doc:meta])* $name:ident, $id:ty, $row:ty) => {
        $(#[$doc])*
        pub struct $name {
            table: Table<$id, $row>,
        }

        impl $name {
            /// Creates an empty store with no simulated latency
            pub fn new() -> Self {
                Self::with_latency(Duration::ZERO)
            }

            /// Creates an empty store whose every operation awaits `latency`
            pub fn with_latency(latency: Duration) -> Self {
                Self {
                    table: Table::new(latency),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

memory_store! {
    /// In-memory seeded user accounts
    MemoryUserStore, UserId, UserAccount
}

memory_store! {
    /// In-memory musician roster
    MemoryMusicianStore, MusicianId, Musician
}

memory_store! {
    /// In-memory song repertoire
    MemorySongStore, SongId, Song
}

memory_store! {
    /// In-memory schedule ledger
    MemoryScheduleStore, ScheduleId, Schedule
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<UserAccount>> {
        Ok(self.table.list().await)
    }

    async fn get(&self, id: UserId) -> Result<Option<UserAccount>> {
        Ok(self.table.get(id).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>> {
        self.table.round_trip().await;
        let rows = self.table.rows.read().await;
        Ok(rows
            .values()
            .find(|a| a.user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn insert(&self, account: UserAccount) -> Result<()> {
        self.table.insert(account.user.id, account).await;
        Ok(())
    }
}

#[async_trait]
impl MusicianStore for MemoryMusicianStore {
    async fn list(&self) -> Result<Vec<Musician>> {
        Ok(self.table.list().await)
    }

    async fn get(&self, id: MusicianId) -> Result<Option<Musician>> {
        Ok(self.table.get(id).await)
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Musician>> {
        self.table.round_trip().await;
        let rows = self.table.rows.read().await;
        Ok(rows
            .values()
            .find(|m| m.user_id == Some(user_id))
            .cloned())
    }

    async fn insert(&self, musician: Musician) -> Result<()> {
        self.table.insert(musician.id, musician).await;
        Ok(())
    }

    async fn update(&self, musician: Musician) -> Result<bool> {
        Ok(self.table.update(musician.id, musician).await)
    }

    async fn remove(&self, id: MusicianId) -> Result<bool> {
        Ok(self.table.remove(id).await)
    }
}

#[async_trait]
impl SongStore for MemorySongStore {
    async fn list(&self) -> Result<Vec<Song>> {
        Ok(self.table.list().await)
    }

    async fn get(&self, id: SongId) -> Result<Option<Song>> {
        Ok(self.table.get(id).await)
    }

    async fn insert(&self, song: Song) -> Result<()> {
        self.table.insert(song.id, song).await;
        Ok(())
    }

    async fn update(&self, song: Song) -> Result<bool> {
        Ok(self.table.update(song.id, song).await)
    }

    async fn remove(&self, id: SongId) -> Result<bool> {
        Ok(self.table.remove(id).await)
    }
}

#[async_trait]
impl ScheduleStore for MemoryScheduleStore {
    async fn list(&self) -> Result<Vec<Schedule>> {
        Ok(self.table.list().await)
    }

    async fn get(&self, id: ScheduleId) -> Result<Option<Schedule>> {
        Ok(self.table.get(id).await)
    }

    async fn insert(&self, schedule: Schedule) -> Result<()> {
        self.table.insert(schedule.id, schedule).await;
        Ok(())
    }

    async fn update(&self, schedule: Schedule) -> Result<bool> {
        Ok(self.table.update(schedule.id, schedule).await)
    }

    async fn remove(&self, id: ScheduleId) -> Result<bool> {
        Ok(self.table.remove(id).await)
    }
}
