//! Musician roster entities
//!
//! A musician carries contact details, a non-empty instrument set, declared
//! availability windows, and a skill level. Availability is advisory only: it
//! is never enforced when the musician is assigned to a schedule.

use super::ids::{MusicianId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Day of week for an availability window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Period of day for an availability window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    /// Gets period as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Evening => "evening",
        }
    }
}

/// A declared day/period window of likely attendance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Availability {
    /// Day of week
    pub day: Day,

    /// Period of day
    pub period: Period,
}

/// Self-assessed skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A musician in the roster
///
/// Referenced by id from schedule assignments; deleting a musician that a
/// schedule still references is rejected by the roster service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Musician {
    /// Unique musician ID
    pub id: MusicianId,

    /// Optional link to a user account
    ///
    /// May be unset and is never required; nothing enforces the link.
    pub user_id: Option<UserId>,

    /// Full name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Instruments the musician plays (never empty)
    pub instruments: Vec<String>,

    /// Declared availability windows
    pub availability: Vec<Availability>,

    /// Skill level
    pub skill_level: SkillLevel,

    /// Date the musician joined the ministry
    pub joined_date: NaiveDate,
}

/// Input for creating a new musician
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMusician {
    /// Optional link to a user account
    pub user_id: Option<UserId>,

    /// Full name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    /// Contact email
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Contact phone number
    #[serde(default)]
    pub phone: String,

    /// Instruments (at least one required)
    #[validate(length(min = 1, message = "At least one instrument is required"))]
    pub instruments: Vec<String>,

    /// Declared availability windows
    #[serde(default)]
    pub availability: Vec<Availability>,

    /// Skill level
    pub skill_level: SkillLevel,

    /// Date joined (defaults to today when omitted)
    pub joined_date: Option<NaiveDate>,
}

/// Input for updating an existing musician
///
/// All fields are optional. Only present fields are merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMusician {
    /// New user account link (use Some(None) to clear)
    pub user_id: Option<Option<UserId>>,

    /// New name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    /// New contact email
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// New phone number
    pub phone: Option<String>,

    /// New instrument set (at least one required)
    #[validate(length(min = 1, message = "At least one instrument is required"))]
    pub instruments: Option<Vec<String>>,

    /// New availability windows
    pub availability: Option<Vec<Availability>>,

    /// New skill level
    pub skill_level: Option<SkillLevel>,

    /// New joined date
    pub joined_date: Option<NaiveDate>,
}

impl UpdateMusician {
    /// Merges the present fields into an existing musician
    pub fn apply_to(self, musician: &mut Musician) {
        if let Some(user_id) = self.user_id {
            musician.user_id = user_id;
        }
        if let Some(name) = self.name {
            musician.name = name;
        }
        if let Some(email) = self.email {
            musician.email = email;
        }
        if let Some(phone) = self.phone {
            musician.phone = phone;
        }
        if let Some(instruments) = self.instruments {
            musician.instruments = instruments;
        }
        if let Some(availability) = self.availability {
            musician.availability = availability;
        }
        if let Some(skill_level) = self.skill_level {
            musician.skill_level = skill_level;
        }
        if let Some(joined_date) = self.joined_date {
            musician.joined_date = joined_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Musician {
        Musician {
            id: MusicianId::new(),
            user_id: None,
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+55 11 99999-0001".to_string(),
            instruments: vec!["Piano".to_string()],
            availability: vec![Availability {
                day: Day::Sunday,
                period: Period::Morning,
            }],
            skill_level: SkillLevel::Advanced,
            joined_date: NaiveDate::from_ymd_opt(2023, 3, 12).unwrap(),
        }
    }

    #[test]
    fn test_create_requires_instruments() {
        let create = CreateMusician {
            user_id: None,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            instruments: vec![],
            availability: vec![],
            skill_level: SkillLevel::Beginner,
            joined_date: None,
        };

        let err = create.validate().unwrap_err();
        assert!(err.field_errors().contains_key("instruments"));
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let mut musician = sample();
        let original_email = musician.email.clone();

        let update = UpdateMusician {
            name: Some("Ana S.".to_string()),
            instruments: Some(vec!["Piano".to_string(), "Organ".to_string()]),
            ..Default::default()
        };
        update.apply_to(&mut musician);

        assert_eq!(musician.name, "Ana S.");
        assert_eq!(musician.instruments.len(), 2);
        assert_eq!(musician.email, original_email);
    }

    #[test]
    fn test_update_can_clear_user_link() {
        let mut musician = sample();
        musician.user_id = Some(UserId::new());

        let update = UpdateMusician {
            user_id: Some(None),
            ..Default::default()
        };
        update.apply_to(&mut musician);

        assert!(musician.user_id.is_none());
    }

    #[test]
    fn test_availability_serialization() {
        let window = Availability {
            day: Day::Sunday,
            period: Period::Evening,
        };
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(json, r#"{"day":"sunday","period":"evening"}"#);
    }
}
