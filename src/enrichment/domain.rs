//! Internal domain models for song enrichment.
//!
//! These types are OUR types - they don't change when the song info API
//! changes. API responses get converted into these types via adapters.

/// Song details obtained from the song info service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongDetail {
    /// Release date exactly as reported (`DD.MM.YYYY`)
    pub release_date: String,
    /// Full lyrics, verses separated by a blank line
    pub lyrics: String,
    /// Video link
    pub youtube_link: String,
}

/// Errors that can occur during enrichment
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    /// The service rejected the requested {group, song}
    #[error("Song info service rejected the request")]
    BadRequest,

    #[error("Song info service responded with HTTP {0}")]
    Upstream(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
