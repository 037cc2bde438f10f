//! `GET /song/library`

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::db::{self, LibraryFilter};
use crate::model::Song;

/// Library filters. Empty values are ignored.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LibraryQuery {
    /// Group name
    pub group: Option<String>,
    /// Song name
    pub song: Option<String>,
    /// Release date (YYYY-MM-DD)
    #[serde(rename = "releaseDate")]
    pub release_date: Option<String>,
}

impl From<LibraryQuery> for LibraryFilter {
    fn from(query: LibraryQuery) -> Self {
        Self {
            group: query.group,
            song: query.song,
            release_date: query.release_date,
        }
    }
}

/// Retrieve the song library
///
/// Returns at most five songs, optionally filtered by group, song and
/// release date.
#[utoipa::path(
    get,
    path = "/song/library",
    tag = "song",
    params(LibraryQuery),
    responses(
        (status = 200, description = "List of songs", body = Vec<Song>),
        (status = 400, description = "Bad request", body = String),
        (status = 500, description = "Internal server error", body = String),
    )
)]
pub async fn receive_library(
    State(state): State<AppState>,
    Query(query): Query<LibraryQuery>,
) -> Result<Json<Vec<Song>>, ApiError> {
    tracing::debug!(?query, "Incoming request parameters");

    let built = LibraryFilter::from(query).build();
    let songs = db::select_songs(&state.pool, &built)
        .await
        .map_err(|e| ApiError::from_error(&e, "Failed to get a successful response"))?;

    tracing::info!(count = songs.len(), "Songs retrieved");
    Ok(Json(songs))
}
