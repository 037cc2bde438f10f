//! `POST /song/add`

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::api::request::{ContentType, check_content_type, decode_json};
use crate::db;
use crate::error::Error;
use crate::model::{NewSong, normalize_release_date};

/// Song to add; the rest is looked up in the song info service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct AddSongRequest {
    /// Group name
    pub group: String,
    /// Song name
    pub song: String,
}

/// Add a new song
///
/// Looks up release date, lyrics and video link in the song info service
/// and stores the song.
#[utoipa::path(
    post,
    path = "/song/add",
    tag = "song",
    request_body = AddSongRequest,
    responses(
        (status = 201, description = "Song added successfully", body = String),
        (status = 400, description = "Invalid JSON, missing fields or song unknown to the song info service", body = String),
        (status = 415, description = "Content-Type header is not application/json", body = String),
        (status = 500, description = "Internal server error", body = String),
    )
)]
pub async fn add_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), ApiError> {
    check_content_type(&headers, ContentType::Optional)?;
    let request: AddSongRequest = decode_json(&body)?;

    if request.group.is_empty() || request.song.is_empty() {
        tracing::warn!(?request, "Missing required fields");
        return Err(ApiError::bad_request("Group and Song fields are required"));
    }
    tracing::info!(group = %request.group, song = %request.song, "Received song data");

    let detail = state
        .song_info
        .song_info(&request.group, &request.song)
        .await
        .map_err(|e| ApiError::from_error(&Error::from(e), "Failed to get a successful response"))?;
    tracing::debug!(release_date = %detail.release_date, "Received song details");

    // A bad date from upstream is not the caller's fault
    let release_date = normalize_release_date(&detail.release_date).map_err(|e| {
        ApiError::with_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            &e,
            "Invalid date format from API",
        )
    })?;

    let song = NewSong {
        group_name: request.group,
        song_name: request.song,
        release_date,
        lyrics: detail.lyrics,
        youtube_link: detail.youtube_link,
    };
    let id = db::insert_song(&state.pool, &song)
        .await
        .map_err(|e| ApiError::from_error(&e, "Failed to add song"))?;

    tracing::info!(id, group = %song.group_name, song = %song.song_name, "Song successfully added");
    Ok((StatusCode::CREATED, "Song added successfully"))
}
