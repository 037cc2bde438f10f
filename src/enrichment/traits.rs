//! Trait abstractions for the song info API to enable testing.
//!
//! Handlers hold an `Arc<dyn SongInfoApi>` so tests can substitute a mock
//! without any network access.

use async_trait::async_trait;

use super::domain::{EnrichmentError, SongDetail};

/// Trait for song detail lookup.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SongInfoApi: Send + Sync {
    /// Look up release date, lyrics and video link of a song.
    async fn song_info(&self, group: &str, song: &str) -> Result<SongDetail, EnrichmentError>;
}

#[async_trait]
impl SongInfoApi for super::songinfo::SongInfoClient {
    async fn song_info(&self, group: &str, song: &str) -> Result<SongDetail, EnrichmentError> {
        self.song_info(group, song).await
    }
}
