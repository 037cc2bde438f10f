//! Release date normalization.
//!
//! Clients and the song info service send dates as `DD.MM.YYYY`; the
//! database stores `YYYY-MM-DD`. Both the add and the update path go
//! through [`normalize_release_date`].

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Format accepted from clients and the song info service.
pub const RELEASE_DATE_INPUT_FORMAT: &str = "%d.%m.%Y";

/// Format stored in the database.
pub const RELEASE_DATE_STORED_FORMAT: &str = "%Y-%m-%d";

/// Convert a `DD.MM.YYYY` date into `YYYY-MM-DD`.
///
/// Anything that is not a valid calendar date in exactly that shape is
/// rejected with [`Error::InvalidDate`].
pub fn normalize_release_date(input: &str) -> Result<String> {
    // chrono accepts single-digit fields, the stored form must not
    let well_formed = input.len() == 10
        && input
            .char_indices()
            .all(|(i, c)| if i == 2 || i == 5 { c == '.' } else { c.is_ascii_digit() });
    if !well_formed {
        return Err(Error::InvalidDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, RELEASE_DATE_INPUT_FORMAT)
        .map(|date| date.format(RELEASE_DATE_STORED_FORMAT).to_string())
        .map_err(|_| Error::InvalidDate(input.to_string()))
}
