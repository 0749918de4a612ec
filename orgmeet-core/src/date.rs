//! Strict `dd/mm/yyyy` date validation and parsing.
//!
//! Roster dates and the reference date both go through this module. The
//! format contract is stricter than chrono's own parser (digits only, no
//! signs, exactly three `/`-separated fields), so validation is done here
//! and `NaiveDate` only materializes a date already proven valid.

use chrono::NaiveDate;

use crate::error::{ScheduleError, ScheduleResult};

/// Whether `text` is a well-formed `dd/mm/yyyy` calendar date.
pub fn is_valid_date(text: &str) -> bool {
    validate(text).is_some()
}

/// Parse a `dd/mm/yyyy` string into a calendar date.
pub fn parse_date(text: &str) -> ScheduleResult<NaiveDate> {
    validate(text).ok_or_else(|| {
        ScheduleError::InvalidDateFormat(format!("'{text}' is not a valid dd/mm/yyyy date"))
    })
}

/// A year is leap iff divisible by 4, except century years, which must
/// also be divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn validate(text: &str) -> Option<NaiveDate> {
    let (day, month, year) = split_fields(text)?;

    if !(1..=12).contains(&month) {
        return None;
    }

    let last_day = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    };
    if !(1..=last_day).contains(&day) {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Split `dd/mm/yyyy` into its three numeric fields.
fn split_fields(text: &str) -> Option<(u32, u32, i32)> {
    let mut parts = text.split('/');
    let day = parse_field(parts.next()?)?;
    let month = parse_field(parts.next()?)?;
    let year = i32::try_from(parse_field(parts.next()?)?).ok()?;

    // More than three fields is malformed
    if parts.next().is_some() {
        return None;
    }

    Some((day, month, year))
}

/// Parse an unsigned decimal literal. Signs are rejected, unlike with a
/// bare `str::parse`.
fn parse_field(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
