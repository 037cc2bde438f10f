//! `GET /song/lyrics`

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::db;
use crate::error::ErrorKind;
use crate::lyrics::{self, LyricsPage};

/// Song to read and the page to return.
///
/// `page` and `limit` are taken as text so that an empty value means
/// "default" and anything else non-numeric is a 400.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LyricsQuery {
    /// Group name
    pub group: Option<String>,
    /// Song name
    pub song: Option<String>,
    /// Page number (1 by default)
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Number of verses per page (2 by default)
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
}

/// Get the lyrics of a song, split into pages of verses
#[utoipa::path(
    get,
    path = "/song/lyrics",
    tag = "song",
    params(LyricsQuery),
    responses(
        (status = 200, description = "Lyrics by page", body = LyricsPage),
        (status = 400, description = "Invalid request parameters or unknown song", body = String),
        (status = 500, description = "Server error", body = String),
    )
)]
pub async fn receive_lyrics(
    State(state): State<AppState>,
    Query(query): Query<LyricsQuery>,
) -> Result<Json<LyricsPage>, ApiError> {
    tracing::debug!(?query, "Incoming request parameters");

    let group = query.group.unwrap_or_default();
    let song = query.song.unwrap_or_default();
    if group.is_empty() || song.is_empty() {
        return Err(ApiError::bad_request("Group and Song parameters are required"));
    }

    let page = parse_number(query.page.as_deref())
        .ok_or_else(|| ApiError::bad_request("Invalid page parameter"))?;
    let limit = parse_number(query.limit.as_deref())
        .ok_or_else(|| ApiError::bad_request("Invalid limit parameter"))?;

    let text = db::get_lyrics(&state.pool, &song, &group)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                ApiError::with_status(StatusCode::BAD_REQUEST, &e, "Failed to get song lyrics")
            }
            _ => ApiError::from_error(&e, "Failed to get song lyrics"),
        })?;

    // A limit below 1 is the only way paginating can fail
    let page = lyrics::paginate(&text, page, limit)
        .map_err(|e| ApiError::from_error(&e, "Invalid limit parameter"))?;

    tracing::info!(
        current_page = page.current_page,
        total_pages = page.total_pages,
        "Lyrics successfully sent to client"
    );
    Ok(Json(page))
}

/// `Some(None)` for a missing or empty value, `None` if it is not an integer.
fn parse_number(value: Option<&str>) -> Option<Option<i64>> {
    match value {
        None | Some("") => Some(None),
        Some(v) => v.parse().ok().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::EnrichmentError;
    use crate::enrichment::traits::mocks::MockSongInfo;
    use crate::model::NewSong;
    use crate::test_utils::{TestApp, mock_new_song, spawn_app};
    use std::sync::Arc;

    const LYRICS: &str = "one\n\ntwo\n\nthree\n\nfour\n\nfive";

    async fn app_with_lyrics(lyrics: &str) -> TestApp {
        let app = spawn_app(Arc::new(MockSongInfo::with_error(EnrichmentError::BadRequest))).await;
        db::insert_song(
            &app.pool,
            &NewSong {
                group_name: "Muse".to_string(),
                song_name: "Uprising".to_string(),
                lyrics: lyrics.to_string(),
                ..mock_new_song()
            },
        )
        .await
        .unwrap();
        app
    }

    async fn get(app: &TestApp, query: &[(&str, &str)]) -> reqwest::Response {
        app.client
            .get(app.url("/song/lyrics"))
            .query(query)
            .send()
            .await
            .unwrap()
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(None), Some(None));
        assert_eq!(parse_number(Some("")), Some(None));
        assert_eq!(parse_number(Some("3")), Some(Some(3)));
        assert_eq!(parse_number(Some("-1")), Some(Some(-1)));
        assert_eq!(parse_number(Some("two")), None);
        assert_eq!(parse_number(Some(" 3")), None);
        assert_eq!(parse_number(Some("3 ")), None);
    }

    #[tokio::test]
    async fn test_default_page() {
        let app = app_with_lyrics(LYRICS).await;
        let response = get(&app, &[("group", "Muse"), ("song", "Uprising")]).await;
        assert_eq!(response.status(), 200);

        let page: LyricsPage = response.json().await.unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.lyrics, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_page_is_clamped() {
        let app = app_with_lyrics(LYRICS).await;
        let response = get(
            &app,
            &[("group", "Muse"), ("song", "Uprising"), ("page", "5"), ("limit", "2")],
        )
        .await;

        let page: LyricsPage = response.json().await.unwrap();
        assert_eq!(page.current_page, 3);
        assert_eq!(page.lyrics, vec!["five"]);
    }

    #[tokio::test]
    async fn test_empty_lyrics() {
        let app = app_with_lyrics("").await;
        let response = get(&app, &[("group", "Muse"), ("song", "Uprising")]).await;
        assert_eq!(response.status(), 200);

        let page: LyricsPage = response.json().await.unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.lyrics.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_parameters() {
        let app = app_with_lyrics(LYRICS).await;
        for query in [
            vec![("group", "Muse"), ("song", "Uprising"), ("page", "first")],
            vec![("group", "Muse"), ("song", "Uprising"), ("limit", "0")],
            vec![("group", "Muse"), ("song", "Uprising"), ("limit", "x")],
            vec![("group", "Muse")],
        ] {
            let response = get(&app, &query).await;
            assert_eq!(response.status(), 400, "{query:?}");
        }
    }

    #[tokio::test]
    async fn test_unknown_song() {
        let app = app_with_lyrics(LYRICS).await;
        let response = get(&app, &[("group", "Queen"), ("song", "Uprising")]).await;
        assert_eq!(response.status(), 400);
        assert_eq!(response.text().await.unwrap(), "Failed to get song lyrics");
    }

    #[tokio::test]
    async fn test_limit_below_one_message() {
        let app = app_with_lyrics(LYRICS).await;
        for limit in ["0", "-3"] {
            let response = get(
                &app,
                &[("group", "Muse"), ("song", "Uprising"), ("limit", limit)],
            )
            .await;
            assert_eq!(response.status(), 400);
            assert_eq!(response.text().await.unwrap(), "Invalid limit parameter");
        }
    }

    #[tokio::test]
    async fn test_padded_page_is_rejected() {
        let app = app_with_lyrics(LYRICS).await;
        let response = get(&app, &[("group", "Muse"), ("song", "Uprising"), ("page", " 2")]).await;
        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let app = app_with_lyrics(LYRICS).await;
        app.pool.close().await;
        let response = get(&app, &[("group", "Muse"), ("song", "Uprising")]).await;
        assert_eq!(response.status(), 500);
    }
}
