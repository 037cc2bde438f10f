//! Core data models for the song library.
//!
//! # Database Schema
//!
//! The models map to the single `songs` table:
//! `(id, group_name, song_name, release_date, lyrics, youtube_link)`.
//! A song is identified by its natural key `{group_name, song_name}`;
//! `id` is assigned by storage and never changes.

mod release_date;

pub use release_date::{RELEASE_DATE_INPUT_FORMAT, RELEASE_DATE_STORED_FORMAT, normalize_release_date};

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A song in the library.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Song {
    /// Database ID (auto-generated)
    pub id: i64,
    /// Performing group
    pub group_name: String,
    /// Song title
    pub song_name: String,
    /// Release date as `YYYY-MM-DD`
    pub release_date: String,
    /// Lyrics, verses separated by a blank line
    pub lyrics: String,
    /// Video link (not validated)
    pub youtube_link: String,
}

/// A song that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub group_name: String,
    pub song_name: String,
    /// Release date as `YYYY-MM-DD`
    pub release_date: String,
    pub lyrics: String,
    pub youtube_link: String,
}
