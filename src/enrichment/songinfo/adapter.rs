//! Adapter layer: Convert song info DTOs to domain models

use super::dto;
use crate::enrichment::domain::SongDetail;

/// Convert a song info response into a [`SongDetail`]
///
/// The release date is passed through untouched; callers normalize it.
pub fn to_song_detail(response: dto::SongDetailResponse) -> SongDetail {
    SongDetail {
        release_date: response.release_date,
        lyrics: response.text,
        youtube_link: response.link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_song_detail() {
        let detail = to_song_detail(dto::SongDetailResponse {
            release_date: "16.07.2006".to_string(),
            text: "verse one\n\nverse two".to_string(),
            link: "https://www.youtube.com/watch?v=Xsp3_a-PMTw".to_string(),
        });

        assert_eq!(detail.release_date, "16.07.2006");
        assert_eq!(detail.lyrics, "verse one\n\nverse two");
        assert_eq!(detail.youtube_link, "https://www.youtube.com/watch?v=Xsp3_a-PMTw");
    }
}
