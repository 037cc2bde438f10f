//! Song enrichment - fetches song details from the external song info service.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`songinfo/dto.rs`) - Exact API response shapes
//! - **Adapter** - Converts DTOs to domain models
//! - **Client** - HTTP client for the song info API
//! - **Traits** - Seam for substituting the client in tests
//!
//! # Usage
//!
//! ```ignore
//! use enrichment::SongInfoClient;
//!
//! let client = SongInfoClient::new("http://127.0.0.1:8081", Duration::from_secs(10))?;
//! let detail = client.song_info("Muse", "Supermassive Black Hole").await?;
//! println!("Released {}", detail.release_date);
//! ```

pub mod domain;
pub mod songinfo;
pub mod traits;

pub use domain::{EnrichmentError, SongDetail};
pub use songinfo::SongInfoClient;
pub use traits::SongInfoApi;
