use crate::models::day_summary::{ComputedDay, MonthSummary};
use std::collections::BTreeSet;

pub fn summarize_month(days: &[ComputedDay]) -> MonthSummary {
    let total_hours: f64 = days.iter().map(|d| d.total_hours).sum();

    let worked: Vec<f64> = days
        .iter()
        .filter(|d| d.is_worked())
        .map(|d| d.total_hours)
        .collect();

    let average_per_worked_day = if worked.is_empty() {
        0.0
    } else {
        worked.iter().sum::<f64>() / worked.len() as f64
    };

    let unknown_codes: BTreeSet<String> = days
        .iter()
        .filter(|d| d.unknown_code)
        .filter_map(|d| d.record.code().map(str::to_string))
        .collect();

    MonthSummary {
        total_hours,
        average_per_worked_day,
        worked_day_count: worked.len(),
        unknown_codes: unknown_codes.into_iter().collect(),
    }
}
