//! Song info API Data Transfer Objects
//!
//! These types match EXACTLY what the song info API returns.
//! DO NOT use these types outside the songinfo module - convert to domain types.

use serde::{Deserialize, Serialize};

/// Response of `GET /info?group=..&song=..`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDetailResponse {
    /// Release date as `DD.MM.YYYY`
    pub release_date: String,
    /// Full lyrics, verses separated by a blank line
    pub text: String,
    /// Video link
    pub link: String,
}
