//! Route handlers, one module per endpoint.

pub mod add_song;
pub mod library;
pub mod lyrics;
pub mod remove_song;
pub mod update_song;

pub use add_song::add_song;
pub use library::receive_library;
pub use lyrics::receive_lyrics;
pub use remove_song::remove_song;
pub use update_song::update_song;
