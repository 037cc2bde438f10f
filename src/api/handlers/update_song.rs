//! `PATCH /song/update`

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::api::request::{ContentType, check_content_type, decode_json};
use crate::db::{self, SongUpdate};
use crate::error::ErrorKind;

/// Partial update of the song currently known as `{firstGroup, firstSong}`.
///
/// Only non-empty new values are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateSongRequest {
    /// Current song name
    pub first_song: String,
    /// Current group name
    pub first_group: String,
    /// New group name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// New song name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song: Option<String>,
    /// New release date (DD.MM.YYYY)
    #[serde(
        rename = "release_date",
        alias = "releaseDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_date: Option<String>,
}

impl From<UpdateSongRequest> for SongUpdate {
    fn from(request: UpdateSongRequest) -> Self {
        Self {
            first_song: request.first_song,
            first_group: request.first_group,
            group: request.group,
            song: request.song,
            release_date: request.release_date,
        }
    }
}

/// Update the song data
#[utoipa::path(
    patch,
    path = "/song/update",
    tag = "song",
    request_body = UpdateSongRequest,
    responses(
        (status = 204, description = "The song data has been successfully updated"),
        (status = 400, description = "Invalid request parameters or nothing to update", body = String),
        (status = 415, description = "Content-Type header is not application/json", body = String),
        (status = 500, description = "Server error", body = String),
    )
)]
pub async fn update_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    check_content_type(&headers, ContentType::Required)?;
    let request: UpdateSongRequest = decode_json(&body)?;

    if request.first_song.is_empty() || request.first_group.is_empty() {
        tracing::warn!(?request, "Missing required fields");
        return Err(ApiError::bad_request(
            "FirstSong and FirstGroup fields are required",
        ));
    }
    tracing::debug!(?request, "Attempting to update song data");

    let update = SongUpdate::from(request);
    let changed = db::update_song(&state.pool, &update)
        .await
        .map_err(|e| {
            let message = match e.kind() {
                ErrorKind::NothingToUpdate => "No fields to update",
                ErrorKind::Validation => "Invalid release date, expected DD.MM.YYYY",
                _ => "Failed to update song",
            };
            ApiError::from_error(&e, message)
        })?;

    if changed == 0 {
        tracing::warn!(
            group = %update.first_group,
            song = %update.first_song,
            "No song matched the update"
        );
    } else {
        tracing::info!(
            group = %update.first_group,
            song = %update.first_song,
            "Song data updated successfully"
        );
    }
    Ok(StatusCode::NO_CONTENT)
}
