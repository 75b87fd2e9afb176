//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Terminal columns taken by `s` (wide characters count as 2).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad `s` with spaces up to `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Hours are always shown with two decimals: `7.60`.
pub fn fmt_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Hours with unit, as used in week totals: `38.00 u`.
pub fn fmt_hours_unit(hours: f64) -> String {
    format!("{} u", fmt_hours(hours))
}

/// Overtime minutes with explicit sign: `+15`, `-30`, `0`.
pub fn fmt_signed_minutes(mins: i64) -> String {
    if mins > 0 {
        format!("+{}", mins)
    } else {
        mins.to_string()
    }
}
