//! Database module for song persistence.
//!
//! Uses SQLx with SQLite for lightweight, embedded database storage.
//! Statements with a variable shape are produced by [`query`]; this module
//! executes them and turns "no row" outcomes into [`Error::NotFound`].
//!
//! Nothing here retries or logs: every failure goes straight back to the
//! caller.
//!
//! # Example
//!
//! ```ignore
//! use song_library::db::{init_db, select_songs, LibraryFilter};
//!
//! let pool = init_db("sqlite:song_library.db", 5).await?;
//! let songs = select_songs(&pool, &LibraryFilter::default().build()).await?;
//! ```

pub mod query;

pub use query::{BuiltQuery, LIBRARY_PAGE_SIZE, LibraryFilter, SongUpdate};

use std::path::Path;

use crate::error::{Error, Result, ResultExt};
use crate::model::{NewSong, Song};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "song_library.db";

/// Build a SQLite database URL from an optional path.
///
/// If no path is provided, uses [`DEFAULT_DB_NAME`] in the current directory.
pub fn db_url(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("sqlite:{}", p.display()),
        None => format!("sqlite:{}", DEFAULT_DB_NAME),
    }
}

/// Initialize the database connection pool and apply the schema.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to `max_connections` connections, and runs the embedded
/// migrations.
pub async fn init_db(db_url: &str, max_connections: u32) -> Result<SqlitePool> {
    if !sqlx::Sqlite::database_exists(db_url).await.unwrap_or(false) {
        sqlx::Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Insert a song inside a single transaction.
///
/// # Returns
///
/// The database ID of the new song.
pub async fn insert_song(pool: &SqlitePool, song: &NewSong) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(query::INSERT_SONG)
        .bind(&song.group_name)
        .bind(&song.song_name)
        .bind(&song.release_date)
        .bind(&song.lyrics)
        .bind(&song.youtube_link)
        .execute(&mut *tx)
        .await?;

    tx.commit()
        .await
        .with_context(format!("committing {} - {}", song.group_name, song.song_name))?;
    Ok(result.last_insert_rowid())
}

/// Run a statement built by [`LibraryFilter::build`].
pub async fn select_songs(pool: &SqlitePool, built: &BuiltQuery) -> Result<Vec<Song>> {
    let mut select = sqlx::query_as::<_, Song>(&built.sql);
    for arg in &built.args {
        select = select.bind(arg.as_str());
    }
    Ok(select.fetch_all(pool).await?)
}

/// Delete a song by its natural key.
///
/// Fails with [`Error::NotFound`] when no row matched.
pub async fn delete_song(pool: &SqlitePool, song_name: &str, group_name: &str) -> Result<()> {
    let result = sqlx::query(query::DELETE_SONG)
        .bind(group_name)
        .bind(song_name)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::not_found(group_name, song_name));
    }
    Ok(())
}

/// Get the full lyrics of a song.
///
/// Fails with [`Error::NotFound`] when no row matched.
pub async fn get_lyrics(pool: &SqlitePool, song_name: &str, group_name: &str) -> Result<String> {
    let row: std::result::Result<(String,), sqlx::Error> = sqlx::query_as(query::GET_LYRICS)
        .bind(song_name)
        .bind(group_name)
        .fetch_one(pool)
        .await;

    match row {
        Ok((lyrics,)) => Ok(lyrics),
        Err(sqlx::Error::RowNotFound) => Err(Error::not_found(group_name, song_name)),
        Err(e) => Err(e.into()),
    }
}

/// Apply a partial update.
///
/// Builder failures ([`Error::NothingToUpdate`], [`Error::InvalidDate`],
/// [`Error::Validation`]) are returned before anything is executed.
///
/// # Returns
///
/// The number of rows changed, which may be zero.
pub async fn update_song(pool: &SqlitePool, update: &SongUpdate) -> Result<u64> {
    let built = update.build()?;

    let mut statement = sqlx::query(&built.sql);
    for arg in &built.args {
        statement = statement.bind(arg.as_str());
    }
    let result = statement.execute(pool).await?;

    Ok(result.rows_affected())
}
