//! Plan files: the per-day input of a session, read from YAML or from a
//! previously exported CSV.

use crate::config::CodeEntry;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub codes: Vec<CodeEntry>,
    #[serde(default)]
    pub days: Vec<PlanDay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanDay {
    pub date: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub manual_hours: Option<RawValue>,
    #[serde(default)]
    pub overtime_minutes: Option<RawValue>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A number as typed by the user; coerced when applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(v) => write!(f, "{v}"),
            RawValue::Float(v) => write!(f, "{v}"),
            RawValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Row of an exported CSV. Numbers stay text so hand edits are coerced
/// instead of rejected.
#[derive(Debug, Deserialize)]
struct CsvPlanRow {
    #[serde(rename = "Datum")]
    date: String,
    #[serde(rename = "Code", default)]
    code: String,
    #[serde(rename = "BIJSuren", default)]
    manual_hours: String,
    #[serde(rename = "OverurenMin", default)]
    overtime_minutes: String,
    #[serde(rename = "Notities", default)]
    notes: String,
}

impl Plan {
    /// `.csv` files are read as exports, anything else as YAML.
    pub fn load(path: &Path) -> AppResult<Self> {
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let plan = if is_csv {
            Self::from_csv(fs::File::open(path)?)?
        } else {
            Self::from_yaml(&fs::read_to_string(path)?)?
        };

        tracing::debug!(path = %path.display(), days = plan.days.len(), "plan loaded");
        Ok(plan)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Plan(e.to_string()))
    }

    /// Year and month are taken from the first row.
    pub fn from_csv<R: std::io::Read>(input: R) -> AppResult<Self> {
        let mut rdr = ::csv::Reader::from_reader(input);
        let mut days = Vec::new();

        for rec in rdr.deserialize::<CsvPlanRow>() {
            let row = rec?;
            days.push(PlanDay {
                date: row.date,
                code: Some(row.code),
                manual_hours: Some(RawValue::Text(row.manual_hours)),
                overtime_minutes: Some(RawValue::Text(row.overtime_minutes)),
                notes: Some(row.notes),
            });
        }

        let first = days.first().map(|d| parse_date(&d.date)).transpose()?;

        Ok(Plan {
            year: first.map(|d| d.year()),
            month: first.map(|d| d.month()),
            codes: Vec::new(),
            days,
        })
    }

    /// Register the plan's codes, then apply its day edits. Returns the
    /// number of days touched.
    pub fn apply(&self, session: &mut Session) -> AppResult<usize> {
        for c in &self.codes {
            session.upsert_code(
                &c.code,
                c.start.as_deref().unwrap_or(""),
                c.end.as_deref().unwrap_or(""),
                c.break_minutes,
                &c.label,
            )?;
        }

        for day in &self.days {
            let date = parse_date(&day.date)?;

            if let Some(code) = &day.code {
                session.assign_code(date, code)?;
            }
            if let Some(hours) = &day.manual_hours {
                session.set_manual_hours_str(date, &hours.to_string())?;
            }
            if let Some(minutes) = &day.overtime_minutes {
                session.set_overtime_minutes_str(date, &minutes.to_string())?;
            }
            if let Some(notes) = &day.notes {
                session.set_notes(date, notes)?;
            }
        }

        Ok(self.days.len())
    }
}

/// Parse a `DATE=CODE` command-line assignment.
pub fn parse_assignment(s: &str) -> AppResult<(NaiveDate, String)> {
    let (date, code) = s
        .split_once('=')
        .ok_or_else(|| AppError::Plan(format!("expected DATE=CODE, got '{s}'")))?;
    Ok((parse_date(date)?, code.trim().to_string()))
}
