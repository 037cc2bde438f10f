//! Parameterized SQL for library listing and partial song updates.
//!
//! Both statements have a variable number of clauses. Values never end up in
//! the SQL text: each one is pushed onto [`BuiltQuery::args`] and referenced
//! by a positional `$n` placeholder, where `n` is its 1-based position in
//! that list. [`BuiltQuery::bind`] is the only way to add a value, so the
//! numbering stays contiguous and in argument order.

use crate::error::{Error, Result};
use crate::model::normalize_release_date;

/// Columns selected for a [`crate::model::Song`].
const SONG_COLUMNS: &str = "id, group_name, song_name, release_date, lyrics, youtube_link";

/// Insert a song; binds group, song, release date, lyrics, link.
pub const INSERT_SONG: &str = "INSERT INTO songs (group_name, song_name, release_date, lyrics, youtube_link) VALUES ($1, $2, $3, $4, $5)";

/// Lyrics of one song; binds song, group.
pub const GET_LYRICS: &str = "SELECT lyrics FROM songs WHERE song_name = $1 AND group_name = $2";

/// Delete by natural key; binds group, song.
pub const DELETE_SONG: &str = "DELETE FROM songs WHERE group_name = $1 AND song_name = $2";

/// Upper bound on the number of songs a library listing returns.
pub const LIBRARY_PAGE_SIZE: usize = 5;

/// SQL text plus the values for its placeholders, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: Vec<String>,
}

impl BuiltQuery {
    fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    /// Push a value and return the placeholder that refers to it.
    fn bind(&mut self, value: impl Into<String>) -> String {
        self.args.push(value.into());
        format!("${}", self.args.len())
    }
}

/// Optional filters of a library listing. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    pub group: Option<String>,
    pub song: Option<String>,
    /// Matched verbatim against the stored `YYYY-MM-DD` value
    pub release_date: Option<String>,
}

impl LibraryFilter {
    /// Build the listing statement.
    ///
    /// Filters are applied in the fixed order group, song, release date and
    /// the result is always capped at [`LIBRARY_PAGE_SIZE`] rows.
    pub fn build(&self) -> BuiltQuery {
        let mut query = BuiltQuery::new(format!("SELECT {SONG_COLUMNS} FROM songs WHERE 1=1"));

        let filters = [
            ("group_name", &self.group),
            ("song_name", &self.song),
            ("release_date", &self.release_date),
        ];
        for (column, value) in filters {
            if let Some(value) = non_empty(value) {
                let placeholder = query.bind(value);
                query.sql.push_str(&format!(" AND {column} = {placeholder}"));
            }
        }

        query.sql.push_str(&format!(" LIMIT {LIBRARY_PAGE_SIZE}"));
        query
    }
}

/// A partial update of the song currently known as
/// `{first_group, first_song}`. Empty new values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongUpdate {
    pub first_song: String,
    pub first_group: String,
    pub group: Option<String>,
    pub song: Option<String>,
    /// New release date as `DD.MM.YYYY`
    pub release_date: Option<String>,
}

impl SongUpdate {
    /// Build the update statement.
    ///
    /// Fails with [`Error::Validation`] if the original pair is incomplete,
    /// [`Error::InvalidDate`] if the new release date does not parse and
    /// [`Error::NothingToUpdate`] if no new value is given. The original
    /// pair is always bound last, song before group.
    pub fn build(&self) -> Result<BuiltQuery> {
        if self.first_song.is_empty() || self.first_group.is_empty() {
            return Err(Error::validation("firstSong and firstGroup are required"));
        }

        let release_date = non_empty(&self.release_date)
            .map(normalize_release_date)
            .transpose()?;

        let mut query = BuiltQuery::new("UPDATE songs SET ");
        let mut assignments = Vec::with_capacity(3);

        let changes = [
            ("group_name", non_empty(&self.group)),
            ("song_name", non_empty(&self.song)),
            ("release_date", release_date.as_deref()),
        ];
        for (column, value) in changes {
            if let Some(value) = value {
                let placeholder = query.bind(value);
                assignments.push(format!("{column} = {placeholder}"));
            }
        }

        if assignments.is_empty() {
            return Err(Error::NothingToUpdate);
        }

        query.sql.push_str(&assignments.join(", "));
        let song = query.bind(self.first_song.as_str());
        let group = query.bind(self.first_group.as_str());
        query
            .sql
            .push_str(&format!(" WHERE song_name = {song} AND group_name = {group}"));

        Ok(query)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
