//! Song info HTTP client
//!
//! Talks to the third-party song info service:
//! `GET {base_url}/info?group=<group>&song=<song>`.
//!
//! A 400 from the service means the caller asked for something it does not
//! know; every other non-success status is the service's own problem. The two
//! are reported as different [`EnrichmentError`] variants so the HTTP layer
//! can answer 400 or 500 respectively.

use std::time::Duration;

use super::{adapter, dto};
use crate::enrichment::domain::{EnrichmentError, SongDetail};

/// Song info API client
#[derive(Debug, Clone)]
pub struct SongInfoClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SongInfoClient {
    /// Create a new client for the service at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EnrichmentError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Look up release date, lyrics and video link of a song
    pub async fn song_info(&self, group: &str, song: &str) -> Result<SongDetail, EnrichmentError> {
        let response = self.send_info_request(group, song).await?;
        Ok(adapter::to_song_detail(response))
    }

    fn info_url(&self, group: &str, song: &str) -> String {
        format!(
            "{}/info?group={}&song={}",
            self.base_url,
            urlencoding::encode(group),
            urlencoding::encode(song)
        )
    }

    /// Send the HTTP request and parse the response
    async fn send_info_request(
        &self,
        group: &str,
        song: &str,
    ) -> Result<dto::SongDetailResponse, EnrichmentError> {
        let url = self.info_url(group, song);
        tracing::debug!(%url, "Fetching song details");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::BAD_REQUEST {
            return Err(EnrichmentError::BadRequest);
        }

        if !status.is_success() {
            return Err(EnrichmentError::Upstream(status.as_u16()));
        }

        response
            .json::<dto::SongDetailResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}
