//! Domain entities for Cantoria
//!
//! This module contains the entity structs, their create/update payloads, and
//! the typed identifiers that link them.
//!
//! # Entities
//!
//! - `user`: Seeded user accounts (login/role check only)
//! - `musician`: The volunteer roster, with instruments and availability
//! - `song`: The repertoire, with key/tempo and usage counters
//! - `schedule`: Dated events assigning musicians and songs by id
//!
//! Ownership rules: a `Schedule` exclusively owns its `MusicianAssignment`
//! value objects but only references musicians and songs by typed id; it is
//! never the owner of their lifecycle.

pub mod ids;
pub mod musician;
pub mod schedule;
pub mod song;
pub mod user;

pub use ids::{MusicianId, ScheduleId, SongId, UserId};
