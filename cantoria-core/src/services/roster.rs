//! Musician registry service
//!
//! Validated CRUD over the roster. Deletion is guarded: a musician that a
//! schedule still references cannot be removed; the caller must unassign
//! first. Schedules hold weak references, so nothing here ever edits them.

use crate::error::{Error, Result};
use crate::models::musician::{CreateMusician, Musician, UpdateMusician};
use crate::models::{MusicianId, UserId};
use crate::store::{MusicianStore, ScheduleStore};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

/// Musician registry over injected stores
#[derive(Clone)]
pub struct Roster {
    musicians: Arc<dyn MusicianStore>,
    schedules: Arc<dyn ScheduleStore>,
}

impl Roster {
    /// Creates the service over its stores
    pub fn new(musicians: Arc<dyn MusicianStore>, schedules: Arc<dyn ScheduleStore>) -> Self {
        Self {
            musicians,
            schedules,
        }
    }

    /// Returns all musicians, ordered by name
    pub async fn list(&self) -> Result<Vec<Musician>> {
        let mut musicians = self.musicians.list().await?;
        musicians.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(musicians)
    }

    /// Looks up a musician by id
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the id is absent
    pub async fn get(&self, id: MusicianId) -> Result<Musician> {
        self.musicians
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("musician", id))
    }

    /// Looks up the musician linked to a user account
    ///
    /// The link is optional on musicians, so absence is a plain `NotFound`.
    pub async fn find_by_user(&self, user_id: UserId) -> Result<Musician> {
        self.musicians
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| Error::not_found("musician for user", user_id))
    }

    /// Validates and creates a musician with a fresh id
    ///
    /// # Errors
    ///
    /// `Error::Validation` when name/email/instrument constraints are violated
    pub async fn create(&self, data: CreateMusician) -> Result<Musician> {
        data.validate()?;

        let musician = Musician {
            id: MusicianId::new(),
            user_id: data.user_id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            instruments: data.instruments,
            availability: data.availability,
            skill_level: data.skill_level,
            joined_date: data.joined_date.unwrap_or_else(|| Utc::now().date_naive()),
        };

        self.musicians.insert(musician.clone()).await?;
        tracing::debug!(musician_id = %musician.id, "Created musician");
        Ok(musician)
    }

    /// Merges a partial update into a musician
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the id is absent, `Error::Validation` on bad fields
    pub async fn update(&self, id: MusicianId, data: UpdateMusician) -> Result<Musician> {
        data.validate()?;

        let mut musician = self.get(id).await?;
        data.apply_to(&mut musician);

        if !self.musicians.update(musician.clone()).await? {
            return Err(Error::not_found("musician", id));
        }
        Ok(musician)
    }

    /// Deletes a musician
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if the id is absent
    /// - `Error::Conflict` while any schedule still references the musician
    pub async fn delete(&self, id: MusicianId) -> Result<()> {
        // Existence first, so a missing id is NotFound rather than a no-op.
        self.get(id).await?;

        let referencing = self
            .schedules
            .list()
            .await?
            .into_iter()
            .filter(|s| s.references_musician(id))
            .count();
        if referencing > 0 {
            return Err(Error::Conflict(format!(
                "Musician is assigned to {} schedule(s); unassign before deleting",
                referencing
            )));
        }

        if !self.musicians.remove(id).await? {
            return Err(Error::not_found("musician", id));
        }
        tracing::debug!(musician_id = %id, "Deleted musician");
        Ok(())
    }
}
