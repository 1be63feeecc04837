//! Derived read-only views over the registries
//!
//! Nothing here mutates state. Every time-dependent view takes `now`
//! explicitly so callers (and tests) share one classification point instead
//! of each comparing wall clocks ad hoc.

use crate::error::Result;
use crate::models::schedule::{EventStatus, Schedule};
use crate::models::MusicianId;
use crate::store::{MusicianStore, ScheduleStore};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Schedules split by derived status
///
/// Upcoming schedules are sorted soonest-first; past schedules most recent
/// first, matching how an agenda reads.
#[derive(Debug, Clone, Serialize)]
pub struct Partition {
    /// Events whose start is still ahead of `now`
    pub upcoming: Vec<Schedule>,

    /// Events whose start has passed
    pub past: Vec<Schedule>,
}

/// Assignment confirmation tallies across all schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfirmationCounts {
    /// Assignments with confirmed = true
    pub confirmed: usize,

    /// Assignments still awaiting confirmation
    pub pending: usize,
}

/// Roster composition tallies
#[derive(Debug, Clone, Serialize)]
pub struct RosterCounts {
    /// Musicians per instrument (a musician counts once per instrument)
    pub by_instrument: BTreeMap<String, usize>,

    /// Musicians per availability period (once per declared period)
    pub by_period: BTreeMap<String, usize>,
}

/// Read-only presentation queries over the stores
#[derive(Clone)]
pub struct Agenda {
    schedules: Arc<dyn ScheduleStore>,
    musicians: Arc<dyn MusicianStore>,
}

impl Agenda {
    /// Creates the service over its stores
    pub fn new(schedules: Arc<dyn ScheduleStore>, musicians: Arc<dyn MusicianStore>) -> Self {
        Self {
            schedules,
            musicians,
        }
    }

    /// Partitions all schedules into upcoming and past relative to `now`
    pub async fn partition(&self, now: DateTime<Utc>) -> Result<Partition> {
        Ok(Self::split(self.schedules.list().await?, now))
    }

    /// Partitions the schedules referencing one musician
    pub async fn for_musician(
        &self,
        musician_id: MusicianId,
        now: DateTime<Utc>,
    ) -> Result<Partition> {
        let mine = self
            .schedules
            .list()
            .await?
            .into_iter()
            .filter(|s| s.references_musician(musician_id))
            .collect();
        Ok(Self::split(mine, now))
    }

    /// Tallies confirmed vs pending assignments across all schedules
    pub async fn confirmation_counts(&self) -> Result<ConfirmationCounts> {
        let mut counts = ConfirmationCounts {
            confirmed: 0,
            pending: 0,
        };
        for schedule in self.schedules.list().await? {
            for assignment in &schedule.musicians {
                if assignment.confirmed {
                    counts.confirmed += 1;
                } else {
                    counts.pending += 1;
                }
            }
        }
        Ok(counts)
    }

    /// Tallies musicians by instrument and by availability period
    pub async fn roster_counts(&self) -> Result<RosterCounts> {
        let mut by_instrument: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_period: BTreeMap<String, usize> = BTreeMap::new();

        for musician in self.musicians.list().await? {
            for instrument in &musician.instruments {
                *by_instrument.entry(instrument.clone()).or_default() += 1;
            }
            let mut periods: Vec<&'static str> = musician
                .availability
                .iter()
                .map(|a| a.period.as_str())
                .collect();
            periods.sort_unstable();
            periods.dedup();
            for period in periods {
                *by_period.entry(period.to_string()).or_default() += 1;
            }
        }

        Ok(RosterCounts {
            by_instrument,
            by_period,
        })
    }

    fn split(schedules: Vec<Schedule>, now: DateTime<Utc>) -> Partition {
        let mut upcoming = Vec::new();
        let mut past = Vec::new();
        for schedule in schedules {
            match schedule.status(now) {
                EventStatus::Upcoming => upcoming.push(schedule),
                EventStatus::Past => past.push(schedule),
            }
        }
        upcoming.sort_by_key(|s| s.starts_at());
        past.sort_by_key(|s| std::cmp::Reverse(s.starts_at()));
        Partition { upcoming, past }
    }
}
