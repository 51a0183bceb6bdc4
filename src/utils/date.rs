//! Date utilities: parsing the user-facing MM/DD/YYYY form and converting
//! to and from the sortable form stored in the database.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Format typed and shown to the user.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Format stored in `entries.task_date`; lexical order equals date order.
pub const DB_DATE_FORMAT: &str = "%Y-%m-%d";

/// Long form used in the browse view header, e.g. "June 04, 2020".
pub const LONG_DATE_FORMAT: &str = "%B %d, %Y";

/// Parse a date typed as `MM/DD/YYYY`.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(trimmed.to_string()))
}

/// Parse a date read back from the database.
pub fn parse_db_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DB_DATE_FORMAT).ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn format_long_date(d: &NaiveDate) -> String {
    d.format(LONG_DATE_FORMAT).to_string()
}

/// Order two dates so the range is never reversed.
pub fn ordered_range(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if a <= b { (a, b) } else { (b, a) }
}
