//! Song info API integration
//!
//! Supplies release date, lyrics and a video link for a {group, song} pair
//! when a song is added to the library.

pub mod dto;
mod adapter;
mod client;

pub use adapter::to_song_detail;
pub use client::SongInfoClient;
