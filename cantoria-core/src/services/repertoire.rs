//! Song repertoire service
//!
//! Validated CRUD over the repertoire. Mirrors the roster: deletion is
//! rejected while any schedule still lists the song. The usage counters on a
//! song pass through update untouched unless explicitly set.

use crate::error::{Error, Result};
use crate::models::song::{CreateSong, Song, UpdateSong};
use crate::models::SongId;
use crate::store::{ScheduleStore, SongStore};
use std::sync::Arc;
use validator::Validate;

/// Song repertoire over injected stores
#[derive(Clone)]
pub struct Repertoire {
    songs: Arc<dyn SongStore>,
    schedules: Arc<dyn ScheduleStore>,
}

impl Repertoire {
    /// Creates the service over its stores
    pub fn new(songs: Arc<dyn SongStore>, schedules: Arc<dyn ScheduleStore>) -> Self {
        Self { songs, schedules }
    }

    /// Returns all songs, ordered by title
    pub async fn list(&self) -> Result<Vec<Song>> {
        let mut songs = self.songs.list().await?;
        songs.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(songs)
    }

    /// Looks up a song by id
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the id is absent
    pub async fn get(&self, id: SongId) -> Result<Song> {
        self.songs
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("song", id))
    }

    /// Validates and creates a song with a fresh id
    ///
    /// New songs start with zeroed usage counters.
    ///
    /// # Errors
    ///
    /// `Error::Validation` when title/key/tempo constraints are violated
    pub async fn create(&self, data: CreateSong) -> Result<Song> {
        data.validate()?;

        let song = Song {
            id: SongId::new(),
            title: data.title,
            artist: data.artist,
            key: data.key,
            tempo: data.tempo,
            category: data.category,
            lyrics: data.lyrics,
            chords: data.chords,
            notes: data.notes,
            times_played: 0,
            last_played: None,
        };

        self.songs.insert(song.clone()).await?;
        tracing::debug!(song_id = %song.id, "Created song");
        Ok(song)
    }

    /// Merges a partial update into a song
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if the id is absent, `Error::Validation` on bad fields
    pub async fn update(&self, id: SongId, data: UpdateSong) -> Result<Song> {
        data.validate()?;

        let mut song = self.get(id).await?;
        data.apply_to(&mut song);

        if !self.songs.update(song.clone()).await? {
            return Err(Error::not_found("song", id));
        }
        Ok(song)
    }

    /// Deletes a song
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if the id is absent
    /// - `Error::Conflict` while any schedule still lists the song
    pub async fn delete(&self, id: SongId) -> Result<()> {
        self.get(id).await?;

        let referencing = self
            .schedules
            .list()
            .await?
            .into_iter()
            .filter(|s| s.references_song(id))
            .count();
        if referencing > 0 {
            return Err(Error::Conflict(format!(
                "Song is listed on {} schedule(s); remove it before deleting",
                referencing
            )));
        }

        if !self.songs.remove(id).await? {
            return Err(Error::not_found("song", id));
        }
        tracing::debug!(song_id = %id, "Deleted song");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::Schedule;
    use crate::models::ScheduleId;
    use crate::store::memory::{MemoryScheduleStore, MemorySongStore};
    use chrono::{NaiveDate, NaiveTime};

    fn service() -> (Repertoire, Arc<MemoryScheduleStore>) {
        let schedules = Arc::new(MemoryScheduleStore::new());
        let repertoire = Repertoire::new(Arc::new(MemorySongStore::new()), schedules.clone());
        (repertoire, schedules)
    }

    fn create_hino() -> CreateSong {
        CreateSong {
            title: "Hino 1".to_string(),
            artist: "Tradicional".to_string(),
            key: "C".to_string(),
            tempo: 90,
            category: "Hymn".to_string(),
            lyrics: None,
            chords: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_starts_counters_at_zero() {
        let (repertoire, _) = service();
        let song = repertoire.create(create_hino()).await.unwrap();
        assert_eq!(song.times_played, 0);
        assert!(song.last_played.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_tempo() {
        let (repertoire, _) = service();
        let mut data = create_hino();
        data.tempo = 300;
        assert!(matches!(
            repertoire.create(data).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_unrecognized_key() {
        let (repertoire, _) = service();
        let mut data = create_hino();
        data.key = "H".to_string();
        assert!(matches!(
            repertoire.create(data).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_song_is_not_found() {
        let (repertoire, _) = service();
        let result = repertoire.update(SongId::new(), UpdateSong::default()).await;
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_listed_song_is_a_conflict() {
        let (repertoire, schedules) = service();
        let song = repertoire.create(create_hino()).await.unwrap();

        schedules
            .insert(Schedule {
                id: ScheduleId::new(),
                title: "Culto".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 9, 6).unwrap(),
                time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                location: String::new(),
                description: String::new(),
                musicians: vec![],
                songs: vec![song.id],
            })
            .await
            .unwrap();

        assert!(matches!(
            repertoire.delete(song.id).await,
            Err(Error::Conflict(_))
        ));
        assert!(repertoire.get(song.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_unlisted_song_succeeds() {
        let (repertoire, _) = service();
        let song = repertoire.create(create_hino()).await.unwrap();

        repertoire.delete(song.id).await.unwrap();
        assert!(matches!(
            repertoire.get(song.id).await,
            Err(Error::NotFound { .. })
        ));
    }
}
