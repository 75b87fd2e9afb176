//! Worked hours for a single day.

use crate::core::registry::ShiftCodeRegistry;
use crate::models::day_record::DayRecord;
use crate::models::day_summary::ComputedDay;
use crate::models::shift_code::ShiftKind;
use crate::utils::time::{hours_between_with, round2};
use chrono::Datelike;

#[derive(Debug, Clone, Copy)]
pub struct HoursOptions {
    /// `start == end` counts as a 24h shift.
    pub full_day_wrap: bool,
}

impl Default for HoursOptions {
    fn default() -> Self {
        Self {
            full_day_wrap: true,
        }
    }
}

/// Shift hours of a day, before overtime.
///
/// - manual-hours code: the hours typed in for the day
/// - unknown or empty code: 0
/// - code without times: 0
/// - timed code: elapsed time minus break, floored at 0, rounded to 2 decimals
pub fn compute_day_hours(record: &DayRecord, registry: &ShiftCodeRegistry) -> f64 {
    compute_day_hours_with(record, registry, HoursOptions::default())
}

pub fn compute_day_hours_with(
    record: &DayRecord,
    registry: &ShiftCodeRegistry,
    opts: HoursOptions,
) -> f64 {
    let Some(code) = record.code() else {
        return 0.0;
    };
    let Some(info) = registry.lookup(code) else {
        return 0.0;
    };

    match info.kind {
        ShiftKind::ManualHours => record.manual_hours(),
        ShiftKind::ZeroDuration => 0.0,
        ShiftKind::TimedShift { start, end } => {
            let gross = hours_between_with(start, end, opts.full_day_wrap);
            let net = gross - info.break_minutes as f64 / 60.0;
            round2(net.max(0.0))
        }
    }
}

pub fn compute_total_hours(shift_hours: f64, overtime_minutes: i64) -> f64 {
    round2(shift_hours + overtime_minutes as f64 / 60.0)
}

pub fn compute_day(record: &DayRecord, registry: &ShiftCodeRegistry, opts: HoursOptions) -> ComputedDay {
    let shift_hours = compute_day_hours_with(record, registry, opts);
    let iso = record.date().iso_week();
    let unknown_code = record.code().is_some_and(|c| !registry.contains(c));

    ComputedDay {
        record: record.clone(),
        shift_hours,
        overtime_hours: record.overtime_minutes() as f64 / 60.0,
        total_hours: compute_total_hours(shift_hours, record.overtime_minutes()),
        iso_week: iso.week(),
        iso_year: iso.year(),
        unknown_code,
    }
}

pub fn compute_days(records: &[DayRecord], registry: &ShiftCodeRegistry, opts: HoursOptions) -> Vec<ComputedDay> {
    records
        .iter()
        .map(|r| compute_day(r, registry, opts))
        .collect()
}
