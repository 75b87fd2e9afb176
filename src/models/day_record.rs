use crate::models::shift_code::normalize_code;
use crate::utils::date::{day_name, weekday_index};
use chrono::NaiveDate;

/// One calendar day of the selected month, as edited by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    date: NaiveDate,
    code: Option<String>,
    manual_hours: f64,
    overtime_minutes: i64,
    notes: String,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            code: None,
            manual_hours: 0.0,
            overtime_minutes: 0,
            notes: String::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// 0 = Monday; always derived from the date.
    pub fn weekday(&self) -> usize {
        weekday_index(self.date)
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn manual_hours(&self) -> f64 {
        self.manual_hours
    }

    pub fn overtime_minutes(&self) -> i64 {
        self.overtime_minutes
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn day_name(&self) -> &'static str {
        day_name(self.weekday())
    }

    /// True once anything differs from a freshly generated day.
    pub fn is_edited(&self) -> bool {
        self.code.is_some()
            || self.manual_hours != 0.0
            || self.overtime_minutes != 0
            || !self.notes.is_empty()
    }

    /// Blank input clears the code.
    pub fn set_code(&mut self, code: &str) {
        let code = normalize_code(code);
        self.code = if code.is_empty() { None } else { Some(code) };
    }

    /// Negative or non-finite values are stored as 0.
    pub fn set_manual_hours(&mut self, hours: f64) {
        self.manual_hours = if hours.is_finite() && hours > 0.0 {
            hours
        } else {
            0.0
        };
    }

    pub fn set_manual_hours_str(&mut self, raw: &str) {
        self.set_manual_hours(coerce_f64(raw));
    }

    pub fn set_overtime_minutes(&mut self, minutes: i64) {
        self.overtime_minutes = minutes;
    }

    pub fn set_overtime_minutes_str(&mut self, raw: &str) {
        self.set_overtime_minutes(coerce_i64(raw));
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }
}

/// Lenient number parsing for typed-in values: "7.5", "7,5" or "" → 0.
pub fn coerce_f64(raw: &str) -> f64 {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Minutes may be typed as "15", "-30" or "15.0"; anything else → 0.
pub fn coerce_i64(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| {
            let v = coerce_f64(raw);
            (v != 0.0).then(|| v.round() as i64)
        })
        .unwrap_or(0)
}
