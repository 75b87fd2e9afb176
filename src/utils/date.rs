use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

/// Weekday names, indexed 0 (Monday) through 6 (Sunday).
pub const DUTCH_DAYNAMES: [&str; 7] = [
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
    "zondag",
];

/// Display format used in tables, week headers and exports.
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Every date from the 1st of `month` up to (excluding) the 1st of the next
/// month, in ascending order. December rolls over into January of `year + 1`.
pub fn month_dates(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let first = first_of_month(year, month)?;
    let next = next_month_start(year, month)?;

    Ok(first.iter_days().take_while(|d| *d < next).collect())
}

pub fn first_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(AppError::InvalidMonth { year, month })
}

fn next_month_start(year: i32, month: u32) -> AppResult<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).ok_or(AppError::InvalidMonth { year, month })
}

/// 0 = Monday … 6 = Sunday.
pub fn weekday_index(d: NaiveDate) -> usize {
    d.weekday().num_days_from_monday() as usize
}

pub fn day_name(index: usize) -> &'static str {
    DUTCH_DAYNAMES.get(index).copied().unwrap_or("")
}

/// The Monday on or before `d`.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

pub fn fmt_date(d: NaiveDate) -> String {
    d.format(DISPLAY_FORMAT).to_string()
}

/// Accepts both `YYYY-MM-DD` and the display format `DD-MM-YYYY`.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, DISPLAY_FORMAT))
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn month_key(year: i32, month: u32) -> String {
    format!("{}-{:02}", year, month)
}
