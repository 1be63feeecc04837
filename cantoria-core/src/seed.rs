//! Seed data
//!
//! The credential table is always seeded. There is no signup flow, so these
//! accounts are the only way in. Demo roster/repertoire/schedule data is
//! optional and meant for exploring the API; it goes through the services so
//! it obeys the same validation as real input.

use crate::auth::password::hash_password;
use crate::error::{Error, Result};
use crate::models::musician::{Availability, CreateMusician, Day, Period, SkillLevel};
use crate::models::schedule::CreateSchedule;
use crate::models::song::CreateSong;
use crate::models::user::{Role, User, UserAccount};
use crate::models::UserId;
use crate::services::{Ledger, Repertoire, Roster};
use crate::store::UserStore;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use std::sync::Arc;

/// A seeded credential table entry, before hashing
pub struct SeedUser {
    /// Login email
    pub email: &'static str,

    /// Display name
    pub name: &'static str,

    /// Role
    pub role: Role,

    /// Plaintext seed password (hashed before storage)
    pub password: &'static str,
}

/// The built-in credential table
pub fn seed_users() -> Vec<SeedUser> {
    vec![
        SeedUser {
            email: "admin@cantoria.app",
            name: "Coordinator",
            role: Role::Admin,
            password: "Maestro#2024",
        },
        SeedUser {
            email: "member@cantoria.app",
            name: "Ministry Member",
            role: Role::Member,
            password: "Louvor#2024",
        },
    ]
}

/// Hashes and inserts the credential table into a user store
///
/// Returns the public views of the seeded users, in table order.
pub async fn seed_identity(users: &Arc<dyn UserStore>) -> Result<Vec<User>> {
    let mut seeded = Vec::new();
    for entry in seed_users() {
        let user = User {
            id: UserId::new(),
            email: entry.email.to_string(),
            name: entry.name.to_string(),
            role: entry.role,
        };
        let password_hash =
            hash_password(entry.password).map_err(|e| Error::Storage(e.to_string()))?;
        users
            .insert(UserAccount {
                user: user.clone(),
                password_hash,
            })
            .await?;
        seeded.push(user);
    }
    tracing::info!(count = seeded.len(), "Seeded credential table");
    Ok(seeded)
}

/// The next date with the given weekday, strictly after `from`
fn next_weekday(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut date = from + Duration::days(1);
    while date.weekday() != weekday {
        date += Duration::days(1);
    }
    date
}

/// Populates demo roster, repertoire, and schedules
///
/// Creates a small explorable data set: three musicians, three songs, one
/// upcoming Sunday service with assignments and a song list, and one past
/// rehearsal.
pub async fn seed_demo(roster: &Roster, repertoire: &Repertoire, ledger: &Ledger) -> Result<()> {
    let ana = roster
        .create(CreateMusician {
            user_id: None,
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+55 11 99999-0001".to_string(),
            instruments: vec!["Piano".to_string(), "Organ".to_string()],
            availability: vec![
                Availability {
                    day: Day::Sunday,
                    period: Period::Morning,
                },
                Availability {
                    day: Day::Wednesday,
                    period: Period::Evening,
                },
            ],
            skill_level: SkillLevel::Advanced,
            joined_date: NaiveDate::from_ymd_opt(2022, 3, 12),
        })
        .await?;

    let bruno = roster
        .create(CreateMusician {
            user_id: None,
            name: "Bruno Lima".to_string(),
            email: "bruno@example.com".to_string(),
            phone: "+55 11 99999-0002".to_string(),
            instruments: vec!["Guitar".to_string()],
            availability: vec![Availability {
                day: Day::Sunday,
                period: Period::Morning,
            }],
            skill_level: SkillLevel::Intermediate,
            joined_date: NaiveDate::from_ymd_opt(2023, 8, 1),
        })
        .await?;

    roster
        .create(CreateMusician {
            user_id: None,
            name: "Clara Nunes".to_string(),
            email: "clara@example.com".to_string(),
            phone: "+55 11 99999-0003".to_string(),
            instruments: vec!["Voice".to_string()],
            availability: vec![Availability {
                day: Day::Sunday,
                period: Period::Evening,
            }],
            skill_level: SkillLevel::Beginner,
            joined_date: NaiveDate::from_ymd_opt(2024, 2, 20),
        })
        .await?;

    let hino = repertoire
        .create(CreateSong {
            title: "Hino 1".to_string(),
            artist: "Tradicional".to_string(),
            key: "C".to_string(),
            tempo: 92,
            category: "Hymn".to_string(),
            lyrics: None,
            chords: None,
            notes: None,
        })
        .await?;

    let quao_grande = repertoire
        .create(CreateSong {
            title: "Quão Grande És Tu".to_string(),
            artist: "Tradicional".to_string(),
            key: "Bb".to_string(),
            tempo: 72,
            category: "Hymn".to_string(),
            lyrics: None,
            chords: None,
            notes: None,
        })
        .await?;

    repertoire
        .create(CreateSong {
            title: "Oceans".to_string(),
            artist: "Hillsong United".to_string(),
            key: "Dm".to_string(),
            tempo: 66,
            category: "Worship".to_string(),
            lyrics: None,
            chords: None,
            notes: None,
        })
        .await?;

    let today = Utc::now().date_naive();

    let service = ledger
        .create(CreateSchedule {
            title: "Culto de Domingo".to_string(),
            date: next_weekday(today, Weekday::Sun),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            location: "Main hall".to_string(),
            description: "Sunday morning service".to_string(),
        })
        .await?;
    ledger
        .assign_musician(service.id, ana.id, "Piano")
        .await?;
    ledger
        .assign_musician(service.id, bruno.id, "Guitar")
        .await?;
    ledger
        .confirm_attendance(service.id, ana.id, true)
        .await?;
    ledger
        .set_songs(service.id, vec![hino.id, quao_grande.id])
        .await?;

    let rehearsal = ledger
        .create(CreateSchedule {
            title: "Ensaio".to_string(),
            date: today - Duration::days(3),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            location: "Rehearsal room".to_string(),
            description: "Weekly rehearsal".to_string(),
        })
        .await?;
    ledger
        .assign_musician(rehearsal.id, ana.id, "Piano")
        .await?;

    tracing::info!("Seeded demo data");
    Ok(())
}
