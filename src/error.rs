//! Application-wide error types.
//!
//! Library modules return [`Error`] so that every failure carries its kind
//! up to the HTTP boundary, where it is mapped to a status code. The binary
//! entry point uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level error enum
//! - [`ErrorKind`]: Coarse classification used by the HTTP layer
//! - Module-specific errors (e.g., [`EnrichmentError`]) for detailed handling
//!
//! # Example
//!
//! ```ignore
//! use song_library::error::{Error, Result};
//!
//! async fn remove(pool: &SqlitePool) -> Result<()> {
//!     db::delete_song(pool, "Supermassive Black Hole", "Muse").await?;
//!     Ok(())
//! }
//! ```

use crate::enrichment::EnrichmentError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Song info lookup error
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Caller supplied malformed or missing input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Release date not in `DD.MM.YYYY` form
    #[error("Invalid release date '{0}', expected DD.MM.YYYY")]
    InvalidDate(String),

    /// No song matches the natural key
    #[error("Song not found: {group} - {song}")]
    NotFound { group: String, song: String },

    /// Partial update without any field to change
    #[error("No fields to update")]
    NothingToUpdate,

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Coarse error classification.
///
/// The HTTP layer picks a status code from this; see `api::error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-fixable input problem
    Validation,
    /// Natural key matched no record
    NotFound,
    /// Builder precondition failure
    NothingToUpdate,
    /// Song info service rejected the caller's input
    UpstreamBadRequest,
    /// Song info service failed or was unreachable
    Upstream,
    /// Storage and migration failures
    Internal,
}

impl Error {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not found error for a natural key.
    pub fn not_found(group: impl Into<String>, song: impl Into<String>) -> Self {
        Self::NotFound {
            group: group.into(),
            song: song.into(),
        }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// Classify this error, looking through any added context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::InvalidDate(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::NothingToUpdate => ErrorKind::NothingToUpdate,
            Self::Enrichment(EnrichmentError::BadRequest) => ErrorKind::UpstreamBadRequest,
            Self::Enrichment(_) => ErrorKind::Upstream,
            Self::WithContext { source, .. } => source.kind(),
            Self::Database(_) | Self::Migration(_) => ErrorKind::Internal,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, sqlx::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Database(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("Muse", "Uprising");
        let msg = err.to_string();
        assert!(msg.contains("Muse"));
        assert!(msg.contains("Uprising"));
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::validation("page must be an integer").context("while reading lyrics");
        let msg = err.to_string();
        assert!(msg.contains("while reading lyrics"));
        assert!(msg.contains("page must be an integer"));
    }

    #[test]
    fn test_kind_looks_through_context() {
        let err = Error::not_found("Muse", "Uprising")
            .context("deleting song")
            .context("handling request");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_enrichment_kinds() {
        assert_eq!(
            Error::from(EnrichmentError::BadRequest).kind(),
            ErrorKind::UpstreamBadRequest
        );
        assert_eq!(
            Error::from(EnrichmentError::Upstream(503)).kind(),
            ErrorKind::Upstream
        );
        assert_eq!(
            Error::from(EnrichmentError::Network("refused".to_string())).kind(),
            ErrorKind::Upstream
        );
    }

    #[test]
    fn test_storage_errors_are_internal() {
        assert_eq!(
            Error::Database(sqlx::Error::PoolClosed).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_result_ext_on_database_error() {
        let result: std::result::Result<(), sqlx::Error> = Err(sqlx::Error::PoolClosed);
        let err = result.with_context("committing Muse - Uprising").unwrap_err();
        assert!(err.to_string().contains("committing Muse - Uprising"));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
