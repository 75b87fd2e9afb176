use crate::models::day_record::DayRecord;
use chrono::NaiveDate;

/// Derived values for one day; never stored, recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedDay {
    pub record: DayRecord,
    pub shift_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,
    pub iso_week: u32,
    pub iso_year: i32,
    /// Code was assigned but is not in the registry.
    pub unknown_code: bool,
}

impl ComputedDay {
    pub fn date(&self) -> NaiveDate {
        self.record.date()
    }

    pub fn is_worked(&self) -> bool {
        self.total_hours > 0.0
    }
}

/// Days of one ISO week that fall in the selected month.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub iso_year: i32,
    pub iso_week: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<ComputedDay>,
    pub total_hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthSummary {
    pub total_hours: f64,
    pub average_per_worked_day: f64,
    pub worked_day_count: usize,
    pub unknown_codes: Vec<String>,
}
