//! `DELETE /song/remove`

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::api::request::{ContentType, check_content_type, decode_json};
use crate::db;
use crate::error::ErrorKind;

/// Natural key of the song to delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct RemoveSongRequest {
    /// Group name
    pub group: String,
    /// Song name
    pub song: String,
}

/// Delete a song
#[utoipa::path(
    delete,
    path = "/song/remove",
    tag = "song",
    request_body = RemoveSongRequest,
    responses(
        (status = 200, description = "The song was successfully deleted", body = String),
        (status = 400, description = "Invalid request parameters", body = String),
        (status = 404, description = "The song was not found", body = String),
        (status = 415, description = "Content-Type header is not application/json", body = String),
        (status = 500, description = "Server error", body = String),
    )
)]
pub async fn remove_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), ApiError> {
    check_content_type(&headers, ContentType::Optional)?;
    let request: RemoveSongRequest = decode_json(&body)?;

    if request.group.is_empty() || request.song.is_empty() {
        tracing::warn!(?request, "Missing required fields");
        return Err(ApiError::bad_request("Group and Song fields are required"));
    }

    db::delete_song(&state.pool, &request.song, &request.group)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ApiError::from_error(&e, "Song not found"),
            _ => ApiError::from_error(&e, "Failed to delete song"),
        })?;

    tracing::info!(group = %request.group, song = %request.song, "Song deleted successfully");
    Ok((StatusCode::OK, "Song deleted successfully"))
}
