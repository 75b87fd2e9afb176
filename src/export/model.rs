// src/export/model.rs

use crate::models::day_summary::ComputedDay;
use crate::utils::date::fmt_date;
use serde::{Deserialize, Serialize};

/// Flat row of the month overview, one per day.
///
/// Field order is the column order of the CSV export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayExport {
    #[serde(rename = "Datum")]
    pub date: String,
    #[serde(rename = "Dag")]
    pub day_name: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "ShiftUren")]
    pub shift_hours: f64,
    #[serde(rename = "BIJSuren")]
    pub manual_hours: f64,
    #[serde(rename = "OverurenMin")]
    pub overtime_minutes: i64,
    #[serde(rename = "OverurenUur")]
    pub overtime_hours: f64,
    #[serde(rename = "TotaalUren")]
    pub total_hours: f64,
    #[serde(rename = "Week")]
    pub iso_week: u32,
    #[serde(rename = "Notities")]
    pub notes: String,
}

impl From<&ComputedDay> for DayExport {
    fn from(d: &ComputedDay) -> Self {
        Self {
            date: fmt_date(d.date()),
            day_name: d.record.day_name().to_string(),
            code: d.record.code().unwrap_or_default().to_string(),
            shift_hours: d.shift_hours,
            manual_hours: d.record.manual_hours(),
            overtime_minutes: d.record.overtime_minutes(),
            overtime_hours: d.overtime_hours,
            total_hours: d.total_hours,
            iso_week: d.iso_week,
            notes: d.record.notes().to_string(),
        }
    }
}

pub fn days_to_export(days: &[ComputedDay]) -> Vec<DayExport> {
    days.iter().map(DayExport::from).collect()
}
