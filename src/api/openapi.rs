//! OpenAPI document for the song library API.

use axum::Json;
use utoipa::OpenApi;

use super::handlers::{add_song, library, lyrics, remove_song, update_song};
use crate::lyrics::LyricsPage;
use crate::model::Song;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Song Library API",
        description = "Store songs, enrich them from the song info service and read their lyrics page by page."
    ),
    paths(
        add_song::add_song,
        library::receive_library,
        lyrics::receive_lyrics,
        update_song::update_song,
        remove_song::remove_song,
    ),
    components(schemas(
        Song,
        LyricsPage,
        add_song::AddSongRequest,
        update_song::UpdateSongRequest,
        remove_song::RemoveSongRequest,
    )),
    tags((name = "song", description = "Song library operations"))
)]
pub struct ApiDoc;

/// `GET /swagger/openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// The document as pretty-printed JSON.
pub fn openapi_pretty() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}
