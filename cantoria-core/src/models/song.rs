//! Song repertoire entities
//!
//! The canonical song record: title/artist/category metadata, a musical key
//! validated against a closed notation set, a tempo bounded to a practical
//! BPM range, optional lyrics/chords/notes text, and usage counters.
//!
//! The usage counters (`times_played`, `last_played`) are stored and
//! serialized but never auto-incremented: wiring them to passed schedules is
//! an extension point, not current behavior.

use super::ids::SongId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Lowest tempo accepted, in beats per minute
pub const MIN_TEMPO_BPM: u16 = 40;

/// Highest tempo accepted, in beats per minute
pub const MAX_TEMPO_BPM: u16 = 240;

/// Recognized pitch spellings for a song key
///
/// A key is one of these, optionally suffixed with `m` for minor
/// (e.g. `"C"`, `"F#"`, `"Bbm"`).
pub const RECOGNIZED_KEYS: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];

/// Validates a key against [`RECOGNIZED_KEYS`] (with optional `m` suffix)
pub fn validate_key(key: &str) -> Result<(), ValidationError> {
    let base = key.strip_suffix('m').unwrap_or(key);
    if RECOGNIZED_KEYS.contains(&base) {
        Ok(())
    } else {
        let mut error = ValidationError::new("key");
        error.message = Some("Key is not a recognized musical notation".into());
        Err(error)
    }
}

/// A song in the repertoire
///
/// Referenced by id from schedule song lists; deleting a song that a schedule
/// still lists is rejected by the repertoire service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song ID
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Artist or composer
    pub artist: String,

    /// Musical key (validated notation, e.g. "C", "F#", "Bbm")
    pub key: String,

    /// Tempo in BPM (40..=240)
    pub tempo: u16,

    /// Category or style, e.g. "Hymn", "Worship"
    pub category: String,

    /// Optional lyrics text
    pub lyrics: Option<String>,

    /// Optional chord chart text
    pub chords: Option<String>,

    /// Optional free-form notes
    pub notes: Option<String>,

    /// How many times the song has been played
    pub times_played: u32,

    /// Date the song was last played
    pub last_played: Option<NaiveDate>,
}

/// Input for creating a new song
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSong {
    /// Song title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    /// Artist or composer
    #[serde(default)]
    pub artist: String,

    /// Musical key
    #[validate(custom(function = validate_key))]
    pub key: String,

    /// Tempo in BPM
    #[validate(range(min = 40, max = 240, message = "Tempo must be between 40 and 240 BPM"))]
    pub tempo: u16,

    /// Category or style
    #[serde(default)]
    pub category: String,

    /// Optional lyrics text
    pub lyrics: Option<String>,

    /// Optional chord chart text
    pub chords: Option<String>,

    /// Optional free-form notes
    pub notes: Option<String>,
}

/// Input for updating an existing song
///
/// All fields are optional. Only present fields are merged. The usage
/// counters are editable here so imports can backfill play history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSong {
    /// New title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    /// New artist
    pub artist: Option<String>,

    /// New key
    #[validate(custom(function = validate_key))]
    pub key: Option<String>,

    /// New tempo in BPM
    #[validate(range(min = 40, max = 240, message = "Tempo must be between 40 and 240 BPM"))]
    pub tempo: Option<u16>,

    /// New category
    pub category: Option<String>,

    /// New lyrics (use Some(None) to clear)
    pub lyrics: Option<Option<String>>,

    /// New chords (use Some(None) to clear)
    pub chords: Option<Option<String>>,

    /// New notes (use Some(None) to clear)
    pub notes: Option<Option<String>>,

    /// New play count
    pub times_played: Option<u32>,

    /// New last-played date (use Some(None) to clear)
    pub last_played: Option<Option<NaiveDate>>,
}

impl UpdateSong {
    /// Merges the present fields into an existing song
    pub fn apply_to(self, song: &mut Song) {
        if let Some(title) = self.title {
            song.title = title;
        }
        if let Some(artist) = self.artist {
            song.artist = artist;
        }
        if let Some(key) = self.key {
            song.key = key;
        }
        if let Some(tempo) = self.tempo {
            song.tempo = tempo;
        }
        if let Some(category) = self.category {
            song.category = category;
        }
        if let Some(lyrics) = self.lyrics {
            song.lyrics = lyrics;
        }
        if let Some(chords) = self.chords {
            song.chords = chords;
        }
        if let Some(notes) = self.notes {
            song.notes = notes;
        }
        if let Some(times_played) = self.times_played {
            song.times_played = times_played;
        }
        if let Some(last_played) = self.last_played {
            song.last_played = last_played;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(key: &str, tempo: u16) -> CreateSong {
        CreateSong {
            title: "Hino 1".to_string(),
            artist: "Tradicional".to_string(),
            key: key.to_string(),
            tempo,
            category: "Hymn".to_string(),
            lyrics: None,
            chords: None,
            notes: None,
        }
    }

    #[test]
    fn test_recognized_keys_accepted() {
        for key in ["C", "F#", "Bb", "Abm", "Em"] {
            assert!(validate_key(key).is_ok(), "{key} should be accepted");
        }
    }

    #[test]
    fn test_unrecognized_keys_rejected() {
        for key in ["H", "c", "C##", "Fa", "", "m"] {
            assert!(validate_key(key).is_err(), "{key} should be rejected");
        }
    }

    #[test]
    fn test_tempo_bounds() {
        assert!(create("C", 40).validate().is_ok());
        assert!(create("C", 240).validate().is_ok());
        assert!(create("C", 39).validate().is_err());
        assert!(create("C", 241).validate().is_err());
    }

    #[test]
    fn test_update_clears_optional_text() {
        let mut song = Song {
            id: SongId::new(),
            title: "Hino 1".to_string(),
            artist: "Tradicional".to_string(),
            key: "C".to_string(),
            tempo: 90,
            category: "Hymn".to_string(),
            lyrics: Some("...".to_string()),
            chords: None,
            notes: None,
            times_played: 3,
            last_played: None,
        };

        let update = UpdateSong {
            lyrics: Some(None),
            tempo: Some(100),
            ..Default::default()
        };
        update.apply_to(&mut song);

        assert!(song.lyrics.is_none());
        assert_eq!(song.tempo, 100);
        assert_eq!(song.times_played, 3);
    }
}
