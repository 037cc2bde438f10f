//! Test utilities and fixtures for song-library tests.
//!
//! This module provides common test helpers, mock factories, and
//! a real server on an ephemeral port to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{spawn_app, mock_new_song};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let app = spawn_app(Arc::new(MockSongInfo::with_error(EnrichmentError::BadRequest))).await;
//!     db::insert_song(&app.pool, &mock_new_song()).await.unwrap();
//!     let response = app.client.get(app.url("/song/library")).send().await.unwrap();
//! }
//! ```

use std::sync::Arc;

use axum::Router;
use sqlx::sqlite::SqlitePool;
use tempfile::TempDir;
use tokio::net::TcpListener;

use crate::api::{self, AppState};
use crate::enrichment::SongInfoApi;
use crate::model::NewSong;

/// Creates a temporary database for testing.
///
/// The database is created in a temporary directory that is automatically
/// cleaned up when the returned `TempDir` is dropped. Migrations are run
/// automatically.
///
/// # Returns
///
/// A tuple of (connection pool, temp directory handle).
/// Keep the TempDir alive for the duration of your test.
pub async fn temp_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db");
    let db_url = crate::db::db_url(Some(&db_path));

    let pool = crate::db::init_db(&db_url, 2)
        .await
        .expect("Failed to initialize test database");

    (pool, dir)
}

/// Creates a mock NewSong with sensible defaults.
///
/// Use struct update syntax to customize:
///
/// ```ignore
/// let song = NewSong {
///     song_name: "Uprising".to_string(),
///     ..mock_new_song()
/// };
/// ```
pub fn mock_new_song() -> NewSong {
    NewSong {
        group_name: "Muse".to_string(),
        song_name: "Supermassive Black Hole".to_string(),
        release_date: "2006-07-16".to_string(),
        lyrics: "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?\n\nOoh\nYou set my soul alight\n\nOoh\nYou set my soul alight".to_string(),
        youtube_link: "https://www.youtube.com/watch?v=Xsp3_a-PMTw".to_string(),
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_http_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub has no local address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

/// The full application running on an ephemeral port.
pub struct TestApp {
    pub base_url: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
    _dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Start the application router over a fresh database, with `song_info`
/// standing in for the song info service.
pub async fn spawn_app(song_info: Arc<dyn SongInfoApi>) -> TestApp {
    let (pool, dir) = temp_db().await;
    let router = api::router(AppState::new(pool.clone(), song_info));
    let base_url = spawn_http_stub(router).await;

    TestApp {
        base_url,
        pool,
        client: reqwest::Client::new(),
        _dir: dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, LibraryFilter};
    use crate::enrichment::EnrichmentError;
    use crate::enrichment::traits::mocks::MockSongInfo;

    #[tokio::test]
    async fn test_temp_db_creates_working_database() {
        let (pool, _dir) = temp_db().await;

        let songs = db::select_songs(&pool, &LibraryFilter::default().build())
            .await
            .unwrap();
        assert!(songs.is_empty());
    }

    #[test]
    fn test_mock_new_song_has_several_verses() {
        let song = mock_new_song();
        assert_eq!(song.group_name, "Muse");
        assert_eq!(song.release_date, "2006-07-16");
        assert_eq!(crate::lyrics::split_verses(&song.lyrics).len(), 3);
    }

    #[tokio::test]
    async fn test_spawn_app_serves_requests() {
        let app = spawn_app(Arc::new(MockSongInfo::with_error(EnrichmentError::BadRequest))).await;
        let response = app.client.get(app.url("/song/library")).send().await.unwrap();
        assert_eq!(response.status(), 200);
    }
}
