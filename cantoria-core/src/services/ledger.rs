//! Schedule ledger service
//!
//! Schedule CRUD plus the assignment and song-list operations. Two contracts
//! here are load-bearing:
//!
//! - `assign_musician` on an already-assigned musician **overwrites the
//!   instrument in place** (the "change instrument" flow), leaving the
//!   confirmation flag untouched. It never duplicates the assignment.
//! - `set_songs` **replaces** the schedule's whole song list; it never
//!   unions with the previous list.
//!
//! Musician and song ids entering the ledger are resolved against their
//! stores before use; unknown ids fail with `NotFound` instead of being
//! stored dangling.

use crate::error::{Error, Result};
use crate::models::schedule::{CreateSchedule, MusicianAssignment, Schedule, UpdateSchedule};
use crate::models::{MusicianId, ScheduleId, SongId};
use crate::store::{MusicianStore, ScheduleStore, SongStore};
use std::sync::Arc;
use validator::Validate;

/// Schedule ledger over injected stores
#[derive(Clone)]
pub struct Ledger {
    schedules: Arc<dyn ScheduleStore>,
    musicians: Arc<dyn MusicianStore>,
    songs: Arc<dyn SongStore>,
}

impl Ledger {
    /// Creates the service over its stores
    pub fn new(
        schedules: Arc<dyn ScheduleStore>,
        musicians: Arc<dyn MusicianStore>,
        songs: Arc<dyn SongStore>,
    ) -> Self {
        Self {
            schedules,
            musicians,
            songs,
        }
    }

    /// Returns all schedules, ordered by start instant
    pub async fn list(&self) -> Result<Vec<Schedule>> {
        let mut schedules = self.schedules.list().await?;
        schedules.sort_by_key(|s| s.starts_at());
        Ok(schedules)
    }

    /// Looks up a schedule by id
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the id is absent
    pub async fn get(&self, id: ScheduleId) -> Result<Schedule> {
        self.schedules
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("schedule", id))
    }

    /// Validates and creates a schedule with a fresh id
    ///
    /// Starts with no assignments and an empty song list.
    ///
    /// # Errors
    ///
    /// `Error::Validation` when the title is missing or blank
    pub async fn create(&self, data: CreateSchedule) -> Result<Schedule> {
        data.validate()?;

        let schedule = Schedule {
            id: ScheduleId::new(),
            title: data.title,
            date: data.date,
            time: data.time,
            location: data.location,
            description: data.description,
            musicians: vec![],
            songs: vec![],
        };

        self.schedules.insert(schedule.clone()).await?;
        tracing::debug!(schedule_id = %schedule.id, "Created schedule");
        Ok(schedule)
    }

    /// Merges a partial update into a schedule's own fields
    ///
    /// Assignments and the song list are untouched; they change through the
    /// dedicated operations below.
    pub async fn update(&self, id: ScheduleId, data: UpdateSchedule) -> Result<Schedule> {
        data.validate()?;

        let mut schedule = self.get(id).await?;
        data.apply_to(&mut schedule);
        self.persist(schedule).await
    }

    /// Deletes a schedule
    ///
    /// No cascade: the schedule owns nothing outside itself.
    pub async fn delete(&self, id: ScheduleId) -> Result<()> {
        if !self.schedules.remove(id).await? {
            return Err(Error::not_found("schedule", id));
        }
        tracing::debug!(schedule_id = %id, "Deleted schedule");
        Ok(())
    }

    /// Assigns a musician to a schedule, or changes their instrument
    ///
    /// The musician id is resolved against the roster first. If the musician
    /// is already assigned, only the instrument is overwritten; `confirmed`
    /// keeps its value. Otherwise a new assignment is appended with
    /// `confirmed = false`.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the schedule or the musician is absent
    pub async fn assign_musician(
        &self,
        schedule_id: ScheduleId,
        musician_id: MusicianId,
        instrument: impl Into<String>,
    ) -> Result<Schedule> {
        let mut schedule = self.get(schedule_id).await?;

        self.musicians
            .get(musician_id)
            .await?
            .ok_or_else(|| Error::not_found("musician", musician_id))?;

        let instrument = instrument.into();
        match schedule
            .musicians
            .iter_mut()
            .find(|a| a.musician_id == musician_id)
        {
            Some(assignment) => {
                assignment.instrument = instrument;
            }
            None => {
                schedule.musicians.push(MusicianAssignment {
                    musician_id,
                    instrument,
                    confirmed: false,
                });
            }
        }

        self.persist(schedule).await
    }

    /// Removes a musician's assignment from a schedule
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the schedule or the assignment is absent
    pub async fn remove_musician(
        &self,
        schedule_id: ScheduleId,
        musician_id: MusicianId,
    ) -> Result<Schedule> {
        let mut schedule = self.get(schedule_id).await?;

        let before = schedule.musicians.len();
        schedule.musicians.retain(|a| a.musician_id != musician_id);
        if schedule.musicians.len() == before {
            return Err(Error::not_found("assignment", musician_id));
        }

        self.persist(schedule).await
    }

    /// Sets a musician's confirmation flag on a schedule
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the schedule or the assignment is absent
    pub async fn confirm_attendance(
        &self,
        schedule_id: ScheduleId,
        musician_id: MusicianId,
        confirmed: bool,
    ) -> Result<Schedule> {
        let mut schedule = self.get(schedule_id).await?;

        let assignment = schedule
            .musicians
            .iter_mut()
            .find(|a| a.musician_id == musician_id)
            .ok_or_else(|| Error::not_found("assignment", musician_id))?;
        assignment.confirmed = confirmed;

        self.persist(schedule).await
    }

    /// Replaces a schedule's song list
    ///
    /// Every id is resolved against the repertoire before the list is
    /// touched; one unknown id fails the whole call and leaves the previous
    /// list in place. Request order is preserved.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the schedule or any song id is absent
    pub async fn set_songs(
        &self,
        schedule_id: ScheduleId,
        song_ids: Vec<SongId>,
    ) -> Result<Schedule> {
        let mut schedule = self.get(schedule_id).await?;

        for song_id in &song_ids {
            self.songs
                .get(*song_id)
                .await?
                .ok_or_else(|| Error::not_found("song", *song_id))?;
        }

        schedule.songs = song_ids;
        self.persist(schedule).await
    }

    /// Writes a schedule back, mapping a lost row to NotFound
    async fn persist(&self, schedule: Schedule) -> Result<Schedule> {
        let id = schedule.id;
        if !self.schedules.update(schedule.clone()).await? {
            return Err(Error::not_found("schedule", id));
        }
        Ok(schedule)
    }
}
