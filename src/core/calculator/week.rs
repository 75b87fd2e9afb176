use crate::models::day_summary::{ComputedDay, WeekSummary};
use crate::utils::date::week_start;
use chrono::Duration;
use std::collections::BTreeMap;

/// Group days by (ISO year, ISO week), in ascending order.
///
/// Weeks at the edges of a month are partial: only the days that were
/// passed in are summed, but `start`/`end` always frame the full
/// Monday-Sunday week.
pub fn group_by_week(days: &[ComputedDay]) -> Vec<WeekSummary> {
    let mut groups: BTreeMap<(i32, u32), Vec<ComputedDay>> = BTreeMap::new();

    for day in days {
        groups
            .entry((day.iso_year, day.iso_week))
            .or_default()
            .push(day.clone());
    }

    groups
        .into_iter()
        .filter_map(|((iso_year, iso_week), mut days)| {
            days.sort_by_key(|d| d.date());
            let first = days.first()?.date();
            let start = week_start(first);
            let total_hours = days.iter().map(|d| d.total_hours).sum();

            Some(WeekSummary {
                iso_year,
                iso_week,
                start,
                end: start + Duration::days(6),
                days,
                total_hours,
            })
        })
        .collect()
}
