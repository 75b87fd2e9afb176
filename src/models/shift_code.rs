use crate::utils::time::format_time;
use chrono::NaiveTime;

/// How a shift code produces its hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftKind {
    /// Fixed start and end time; hours are derived from the clock.
    TimedShift { start: NaiveTime, end: NaiveTime },
    /// No times; the hours are typed in per day (e.g. training).
    ManualHours,
    /// No times and no hours (e.g. a paid holiday).
    ZeroDuration,
}

impl ShiftKind {
    pub fn is_manual(&self) -> bool {
        matches!(self, ShiftKind::ManualHours)
    }

    pub fn times(&self) -> Option<(NaiveTime, NaiveTime)> {
        match self {
            ShiftKind::TimedShift { start, end } => Some((*start, *end)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftCode {
    pub code: String,
    pub kind: ShiftKind,
    pub break_minutes: u32,
    pub label: String,
}

impl ShiftCode {
    pub fn start(&self) -> Option<NaiveTime> {
        self.kind.times().map(|(s, _)| s)
    }

    pub fn end(&self) -> Option<NaiveTime> {
        self.kind.times().map(|(_, e)| e)
    }

    /// Legend line, without the code itself.
    pub fn describe(&self) -> String {
        match self.kind.times() {
            Some((start, end)) => format!(
                "{} • {}–{} • pauze {}m",
                self.label,
                format_time(start),
                format_time(end),
                self.break_minutes
            ),
            None => format!("{} • variabel / 0u", self.label),
        }
    }
}

/// Codes are keys: trimmed and case-insensitive.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}
