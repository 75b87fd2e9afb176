//! Shift-code registry: the codes a day can be assigned, keyed by their
//! normalized (trimmed, lowercase) name.

use crate::config::{CodeEntry, Config};
use crate::errors::{AppError, AppResult};
use crate::models::shift_code::{ShiftCode, ShiftKind, normalize_code};
use crate::utils::time::parse_time;

pub const DEFAULT_MANUAL_CODE: &str = "bijs";

/// Seed table: (code, start, end, break minutes, label).
const SEED_CODES: [(&str, &str, &str, u32, &str); 11] = [
    ("v4.5", "07:00", "11:00", 0, "Vroege shift 4,5u"),
    ("vv6", "06:45", "13:15", 0, "Vroege shift 6u (pauze betaald)"),
    ("vv7.6", "06:45", "14:51", 30, "Vroege shift 7,6u"),
    ("ll7.6", "13:09", "21:15", 30, "Late shift 7,6u"),
    ("ll6.25", "14:45", "21:15", 0, "Late shift 6,25u"),
    ("ll3,8", "16:00", "20:03", 0, "Late shift 3,8u"),
    ("ln7,6", "15:00", "23:00", 30, "Late nacht 7,6u"),
    ("ln6", "16:30", "23:00", 0, "Late nacht 6u"),
    ("n10", "21:00", "07:01", 0, "Nacht 10u (over middernacht)"),
    ("bijs", "", "", 0, "Bijscholing (uren invullen)"),
    ("fdrecup", "", "", 0, "Betaalde feestdag (0u)"),
];

#[derive(Debug, Clone)]
pub struct ShiftCodeRegistry {
    // insertion order is the legend order
    codes: Vec<ShiftCode>,
    manual_code: String,
}

impl Default for ShiftCodeRegistry {
    fn default() -> Self {
        Self::with_manual_code(DEFAULT_MANUAL_CODE)
    }
}

impl ShiftCodeRegistry {
    /// An empty registry; codes without times named `manual_code` become
    /// manual-hours codes.
    pub fn empty(manual_code: &str) -> Self {
        Self {
            codes: Vec::new(),
            manual_code: normalize_code(manual_code),
        }
    }

    /// The seed table, with `manual_code` as the manual-hours code.
    pub fn with_manual_code(manual_code: &str) -> Self {
        let mut reg = Self::empty(manual_code);
        for (code, start, end, pause, label) in SEED_CODES {
            let kind = reg.kind_for(code, start, end).unwrap_or(ShiftKind::ZeroDuration);
            reg.insert(ShiftCode {
                code: normalize_code(code),
                kind,
                break_minutes: pause,
                label: label.to_string(),
            });
        }
        reg
    }

    /// Seed table plus the extra codes of the configuration file.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let mut reg = Self::with_manual_code(&cfg.manual_hours_code);
        reg.apply_entries(&cfg.codes)?;
        Ok(reg)
    }

    pub fn apply_entries(&mut self, entries: &[CodeEntry]) -> AppResult<()> {
        for e in entries {
            self.upsert(
                &e.code,
                e.start.as_deref().unwrap_or(""),
                e.end.as_deref().unwrap_or(""),
                e.break_minutes,
                &e.label,
            )?;
        }
        Ok(())
    }

    /// Insert or overwrite a code; last write wins.
    ///
    /// `start`/`end` are "HH:MM" or empty. Both empty defines a code without
    /// times: manual hours for the designated manual code, zero hours
    /// otherwise. Malformed times or a single missing time are rejected and
    /// nothing is stored.
    pub fn upsert(
        &mut self,
        code: &str,
        start: &str,
        end: &str,
        break_minutes: u32,
        label: &str,
    ) -> AppResult<&ShiftCode> {
        let key = normalize_code(code);
        if key.is_empty() {
            return Err(AppError::InvalidShiftCode {
                code: code.to_string(),
                reason: "code must not be empty".into(),
            });
        }

        let kind = self.kind_for(&key, start, end)?;
        let label = if label.trim().is_empty() {
            key.clone()
        } else {
            label.trim().to_string()
        };

        tracing::debug!(code = %key, ?kind, break_minutes, "upsert shift code");

        Ok(self.insert(ShiftCode {
            code: key,
            kind,
            break_minutes,
            label,
        }))
    }

    /// Store a fully built code, replacing any code with the same key.
    pub fn insert(&mut self, mut code: ShiftCode) -> &ShiftCode {
        code.code = normalize_code(&code.code);
        let idx = match self.codes.iter().position(|c| c.code == code.code) {
            Some(i) => {
                self.codes[i] = code;
                i
            }
            None => {
                self.codes.push(code);
                self.codes.len() - 1
            }
        };
        &self.codes[idx]
    }

    /// Case-insensitive, trimmed lookup.
    pub fn lookup(&self, code: &str) -> Option<&ShiftCode> {
        let key = normalize_code(code);
        self.codes.iter().find(|c| c.code == key)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Legend line for `code`, or `None` when the code is unknown.
    pub fn describe(&self, code: &str) -> Option<String> {
        self.lookup(code).map(ShiftCode::describe)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShiftCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn kind_for(&self, key: &str, start: &str, end: &str) -> AppResult<ShiftKind> {
        let start = parse_time(start)?;
        let end = parse_time(end)?;

        match (start, end) {
            (Some(start), Some(end)) => Ok(ShiftKind::TimedShift { start, end }),
            (None, None) if normalize_code(key) == self.manual_code => Ok(ShiftKind::ManualHours),
            (None, None) => Ok(ShiftKind::ZeroDuration),
            _ => Err(AppError::InvalidShiftCode {
                code: key.to_string(),
                reason: "start and end must both be set or both be empty".into(),
            }),
        }
    }
}
