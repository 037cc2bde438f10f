//! HTTP API of the song library.
//!
//! | Method   | Path                    | Handler                       |
//! |----------|-------------------------|-------------------------------|
//! | `POST`   | `/song/add`             | [`handlers::add_song`]        |
//! | `GET`    | `/song/library`         | [`handlers::receive_library`] |
//! | `GET`    | `/song/lyrics`          | [`handlers::receive_lyrics`]  |
//! | `PATCH`  | `/song/update`          | [`handlers::update_song`]     |
//! | `DELETE` | `/song/remove`          | [`handlers::remove_song`]     |
//! | `GET`    | `/swagger/openapi.json` | [`openapi::openapi_json`]     |
//!
//! Handlers share nothing but [`AppState`]; every request is logged by
//! [`middleware::log_requests`].

pub mod error;
pub mod handlers;
mod middleware;
pub mod openapi;
mod request;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, patch, post};
use sqlx::SqlitePool;

use crate::enrichment::SongInfoApi;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub song_info: Arc<dyn SongInfoApi>,
}

impl AppState {
    pub fn new(pool: SqlitePool, song_info: Arc<dyn SongInfoApi>) -> Self {
        Self { pool, song_info }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/song/add", post(handlers::add_song))
        .route("/song/library", get(handlers::receive_library))
        .route("/song/lyrics", get(handlers::receive_lyrics))
        .route("/song/update", patch(handlers::update_song))
        .route("/song/remove", delete(handlers::remove_song))
        .route("/swagger/openapi.json", get(openapi::openapi_json))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state)
}
