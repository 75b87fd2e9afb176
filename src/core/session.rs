//! The state of one planning session: the selected month, its day records
//! and the shift-code registry they refer to.

use crate::core::calculator::hours::{HoursOptions, compute_day_hours_with, compute_days};
use crate::core::calculator::month::summarize_month;
use crate::core::calculator::week::group_by_week;
use crate::core::registry::ShiftCodeRegistry;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::day_summary::{ComputedDay, MonthSummary, WeekSummary};
use crate::models::shift_code::ShiftCode;
use crate::utils::date::{month_dates, month_key};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Session {
    year: i32,
    month: u32,
    registry: ShiftCodeRegistry,
    days: Vec<DayRecord>,
    options: HoursOptions,
}

impl Session {
    pub fn new(year: i32, month: u32, registry: ShiftCodeRegistry) -> AppResult<Self> {
        Ok(Self {
            year,
            month,
            registry,
            days: build_records(year, month)?,
            options: HoursOptions::default(),
        })
    }

    pub fn with_options(mut self, options: HoursOptions) -> Self {
        self.options = options;
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_key(&self) -> String {
        month_key(self.year, self.month)
    }

    pub fn registry(&self) -> &ShiftCodeRegistry {
        &self.registry
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// Switch to another month.
    ///
    /// Selecting the current month keeps everything. Any other month
    /// regenerates the day records, dropping all edits; the return value
    /// tells whether edited days were lost.
    pub fn select_month(&mut self, year: i32, month: u32) -> AppResult<bool> {
        if year == self.year && month == self.month {
            return Ok(false);
        }

        let fresh = build_records(year, month)?;
        let discarded = self.days.iter().filter(|d| d.is_edited()).count();

        if discarded > 0 {
            tracing::warn!(
                from = %self.month_key(),
                to = %month_key(year, month),
                discarded,
                "month changed, edited days discarded"
            );
        }

        self.year = year;
        self.month = month;
        self.days = fresh;
        Ok(discarded > 0)
    }

    pub fn upsert_code(
        &mut self,
        code: &str,
        start: &str,
        end: &str,
        break_minutes: u32,
        label: &str,
    ) -> AppResult<&ShiftCode> {
        self.registry.upsert(code, start, end, break_minutes, label)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.iter().find(|d| d.date() == date)
    }

    pub fn day_mut(&mut self, date: NaiveDate) -> AppResult<&mut DayRecord> {
        let key = self.month_key();
        self.days
            .iter_mut()
            .find(|d| d.date() == date)
            .ok_or_else(|| AppError::DateOutOfMonth {
                date: date.to_string(),
                month: key,
            })
    }

    /// Codes are not checked against the registry here; unknown codes are
    /// reported by [`Session::summary`].
    pub fn assign_code(&mut self, date: NaiveDate, code: &str) -> AppResult<()> {
        self.day_mut(date)?.set_code(code);
        Ok(())
    }

    pub fn set_manual_hours(&mut self, date: NaiveDate, hours: f64) -> AppResult<()> {
        self.day_mut(date)?.set_manual_hours(hours);
        Ok(())
    }

    pub fn set_manual_hours_str(&mut self, date: NaiveDate, raw: &str) -> AppResult<()> {
        self.day_mut(date)?.set_manual_hours_str(raw);
        Ok(())
    }

    pub fn set_overtime_minutes(&mut self, date: NaiveDate, minutes: i64) -> AppResult<()> {
        self.day_mut(date)?.set_overtime_minutes(minutes);
        Ok(())
    }

    pub fn set_overtime_minutes_str(&mut self, date: NaiveDate, raw: &str) -> AppResult<()> {
        self.day_mut(date)?.set_overtime_minutes_str(raw);
        Ok(())
    }

    pub fn set_notes(&mut self, date: NaiveDate, notes: &str) -> AppResult<()> {
        self.day_mut(date)?.set_notes(notes);
        Ok(())
    }

    pub fn day_hours(&self, date: NaiveDate) -> Option<f64> {
        self.day(date)
            .map(|d| compute_day_hours_with(d, &self.registry, self.options))
    }

    pub fn computed_days(&self) -> Vec<ComputedDay> {
        compute_days(&self.days, &self.registry, self.options)
    }

    pub fn weeks(&self) -> Vec<WeekSummary> {
        group_by_week(&self.computed_days())
    }

    pub fn summary(&self) -> MonthSummary {
        summarize_month(&self.computed_days())
    }

    /// `shift_overzicht_<year>_<MM>.<ext>`
    pub fn export_file_name(&self, ext: &str) -> String {
        format!("shift_overzicht_{}_{:02}.{}", self.year, self.month, ext)
    }
}

fn build_records(year: i32, month: u32) -> AppResult<Vec<DayRecord>> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth { year, month });
    }
    Ok(month_dates(year, month)?
        .into_iter()
        .map(DayRecord::new)
        .collect())
}
