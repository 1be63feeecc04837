//! Typed entity identifiers
//!
//! Schedules reference musicians and songs by id only, never by ownership.
//! Wrapping each id in its own newtype keeps a `SongId` from being handed to
//! an operation expecting a `MusicianId`; on the wire they serialize as plain
//! UUID strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generates a fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

entity_id! {
    /// Identifies a seeded user account
    UserId
}

entity_id! {
    /// Identifies a musician in the roster
    MusicianId
}

entity_id! {
    /// Identifies a song in the repertoire
    SongId
}

entity_id! {
    /// Identifies a schedule in the ledger
    ScheduleId
}
