//! Lyrics pagination.
//!
//! Lyrics are stored as one text; a verse is whatever sits between two
//! blank-line separators (`"\n\n"`). Pages are counted in verses.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Page returned when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Verses per page when the caller does not say.
pub const DEFAULT_VERSES_PER_PAGE: i64 = 2;

/// Separator between two verses.
pub const VERSE_SEPARATOR: &str = "\n\n";

/// One page of verses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LyricsPage {
    /// 1-based page actually returned after clamping
    pub current_page: i64,
    pub total_pages: i64,
    /// Verses on this page
    pub lyrics: Vec<String>,
}

/// Split lyrics into verses.
///
/// The split is verbatim: leading or trailing separators produce empty
/// verses. Empty text has no verses at all.
pub fn split_verses(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(VERSE_SEPARATOR).collect()
}

/// Return one page of `text`.
///
/// `page` defaults to [`DEFAULT_PAGE`] and `limit` to
/// [`DEFAULT_VERSES_PER_PAGE`]. See [`paginate_verses`] for clamping.
pub fn paginate(text: &str, page: Option<i64>, limit: Option<i64>) -> Result<LyricsPage> {
    paginate_verses(
        &split_verses(text),
        page.unwrap_or(DEFAULT_PAGE),
        limit.unwrap_or(DEFAULT_VERSES_PER_PAGE),
    )
}

/// Return page `page` of `verses`, `limit` verses per page.
///
/// A page past the end is clamped to the last page, then anything below 1
/// is clamped to 1. With no verses this yields page 1 of 0 and an empty
/// list. A `limit` below 1 is rejected.
pub fn paginate_verses<S: AsRef<str>>(verses: &[S], page: i64, limit: i64) -> Result<LyricsPage> {
    if limit < 1 {
        return Err(Error::validation(format!(
            "limit must be at least 1, got {limit}"
        )));
    }

    let limit = limit as usize;
    let total_pages = verses.len().div_ceil(limit) as i64;

    let mut current_page = page;
    if current_page > total_pages {
        current_page = total_pages;
    }
    if current_page < 1 {
        current_page = 1;
    }

    let start = ((current_page as usize - 1) * limit).min(verses.len());
    let end = start.saturating_add(limit).min(verses.len());

    Ok(LyricsPage {
        current_page,
        total_pages,
        lyrics: verses[start..end]
            .iter()
            .map(|verse| verse.as_ref().to_string())
            .collect(),
    })
}
