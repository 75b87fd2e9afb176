//! Time utilities: parsing HH:MM, elapsed hours on a 24h clock, rounding.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Parse an "HH:MM" string.
///
/// Empty (or blank) input means "no time defined" and yields `Ok(None)`.
/// Anything else must be a valid hour (0-23) and minute (0-59).
pub fn parse_time(t: &str) -> AppResult<Option<NaiveTime>> {
    let t = t.trim();
    if t.is_empty() {
        return Ok(None);
    }

    NaiveTime::parse_from_str(t, "%H:%M")
        .map(Some)
        .map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Elapsed hours from `start` to `end`.
///
/// When `end <= start` the shift crosses midnight and 24h are added to `end`,
/// so `start == end` yields a full day (24.0).
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    hours_between_with(start, end, true)
}

/// Same as [`hours_between`], but with `full_day_wrap == false` a shift
/// starting and ending at the same minute lasts 0 hours instead of 24.
pub fn hours_between_with(start: NaiveTime, end: NaiveTime, full_day_wrap: bool) -> f64 {
    if start == end && !full_day_wrap {
        return 0.0;
    }

    let mut secs = (end - start).num_seconds();
    if end <= start {
        secs += SECONDS_PER_DAY;
    }

    secs as f64 / 3600.0
}

/// Round to two decimals (hours are always shown and exported as 0.00).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
