//! Schedule ledger entities
//!
//! A schedule is a dated church service or rehearsal. It exclusively owns its
//! musician assignments (value objects with no identity of their own) and
//! references repertoire songs by id.
//!
//! A schedule's upcoming/past status is derived, never stored: [`classify`]
//! is the single comparison point, recomputed against an injected `now` on
//! every read so callers cannot drift apart.

use super::ids::{MusicianId, ScheduleId, SongId};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Derived schedule status relative to a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// The event start is strictly in the future
    Upcoming,

    /// The event start has been reached or passed
    Past,
}

/// Classifies an event start against `now`
///
/// A schedule is `Upcoming` while `now` is strictly before its start and
/// `Past` from the start instant onward. All times are UTC.
pub fn classify(date: NaiveDate, time: NaiveTime, now: DateTime<Utc>) -> EventStatus {
    let starts_at = Utc.from_utc_datetime(&date.and_time(time));
    if now < starts_at {
        EventStatus::Upcoming
    } else {
        EventStatus::Past
    }
}

/// The pairing of a musician to a schedule
///
/// Owned by its schedule; a musician id appears at most once per schedule.
/// `confirmed` starts false at assignment time and is toggled independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicianAssignment {
    /// The assigned musician
    pub musician_id: MusicianId,

    /// Instrument for this event
    ///
    /// Free-form: not required to be one the musician's profile lists.
    pub instrument: String,

    /// Whether the musician has confirmed attendance
    pub confirmed: bool,
}

/// A dated event with musician and song assignments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique schedule ID
    pub id: ScheduleId,

    /// Event title, e.g. "Culto"
    pub title: String,

    /// Event date (UTC)
    pub date: NaiveDate,

    /// Event start time (UTC)
    pub time: NaiveTime,

    /// Venue or room
    pub location: String,

    /// Free-form description
    pub description: String,

    /// Musician assignments (one per musician id)
    pub musicians: Vec<MusicianAssignment>,

    /// Repertoire songs for the event, in performance order
    pub songs: Vec<SongId>,
}

impl Schedule {
    /// The event start as a UTC instant
    pub fn starts_at(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.date.and_time(self.time))
    }

    /// Derived status relative to `now`
    pub fn status(&self, now: DateTime<Utc>) -> EventStatus {
        classify(self.date, self.time, now)
    }

    /// Looks up the assignment for a musician, if any
    pub fn assignment_for(&self, musician_id: MusicianId) -> Option<&MusicianAssignment> {
        self.musicians
            .iter()
            .find(|a| a.musician_id == musician_id)
    }

    /// Whether the schedule references a musician
    pub fn references_musician(&self, musician_id: MusicianId) -> bool {
        self.assignment_for(musician_id).is_some()
    }

    /// Whether the schedule lists a song
    pub fn references_song(&self, song_id: SongId) -> bool {
        self.songs.contains(&song_id)
    }
}

/// Input for creating a new schedule
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSchedule {
    /// Event title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    /// Event date
    pub date: NaiveDate,

    /// Event start time
    pub time: NaiveTime,

    /// Venue or room
    #[serde(default)]
    pub location: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

/// Input for updating an existing schedule
///
/// Covers the event's own fields only; assignments and the song list change
/// through the dedicated ledger operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSchedule {
    /// New title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    /// New date
    pub date: Option<NaiveDate>,

    /// New start time
    pub time: Option<NaiveTime>,

    /// New location
    pub location: Option<String>,

    /// New description
    pub description: Option<String>,
}

impl UpdateSchedule {
    /// Merges the present fields into an existing schedule
    pub fn apply_to(self, schedule: &mut Schedule) {
        if let Some(title) = self.title {
            schedule.title = title;
        }
        if let Some(date) = self.date {
            schedule.date = date;
        }
        if let Some(time) = self.time {
            schedule.time = time;
        }
        if let Some(location) = self.location {
            schedule.location = location;
        }
        if let Some(description) = self.description {
            schedule.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(date: (i32, u32, u32), time: (u32, u32)) -> (NaiveDate, NaiveTime) {
        (
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
        )
    }

    #[test]
    fn test_classify_before_start_is_upcoming() {
        let (date, time) = at((2026, 9, 6), (10, 0));
        let now = Utc.with_ymd_and_hms(2026, 9, 6, 9, 59, 59).unwrap();
        assert_eq!(classify(date, time, now), EventStatus::Upcoming);
    }

    #[test]
    fn test_classify_at_start_is_past() {
        let (date, time) = at((2026, 9, 6), (10, 0));
        let now = Utc.with_ymd_and_hms(2026, 9, 6, 10, 0, 0).unwrap();
        assert_eq!(classify(date, time, now), EventStatus::Past);
    }

    #[test]
    fn test_classify_matches_direct_comparison_over_random_nows() {
        // Walk a spread of now-times around the start and check classify
        // agrees with direct instant comparison at every offset.
        let (date, time) = at((2026, 9, 6), (10, 0));
        let starts_at = Utc.from_utc_datetime(&date.and_time(time));

        for offset_minutes in (-4320..=4320).step_by(17) {
            let now = starts_at + Duration::minutes(offset_minutes);
            let expected = if now < starts_at {
                EventStatus::Upcoming
            } else {
                EventStatus::Past
            };
            assert_eq!(classify(date, time, now), expected, "offset {offset_minutes}m");
        }
    }

    #[test]
    fn test_create_schedule_requires_title() {
        let (date, time) = at((2026, 9, 6), (10, 0));
        let create = CreateSchedule {
            title: String::new(),
            date,
            time,
            location: String::new(),
            description: String::new(),
        };
        assert!(create.validate().is_err());
    }

    #[test]
    fn test_assignment_lookup() {
        let (date, time) = at((2026, 9, 6), (10, 0));
        let musician_id = MusicianId::new();
        let schedule = Schedule {
            id: ScheduleId::new(),
            title: "Culto".to_string(),
            date,
            time,
            location: "Main hall".to_string(),
            description: String::new(),
            musicians: vec![MusicianAssignment {
                musician_id,
                instrument: "Piano".to_string(),
                confirmed: false,
            }],
            songs: vec![],
        };

        assert!(schedule.references_musician(musician_id));
        assert!(!schedule.references_musician(MusicianId::new()));
        assert_eq!(
            schedule.assignment_for(musician_id).unwrap().instrument,
            "Piano"
        );
    }
}
