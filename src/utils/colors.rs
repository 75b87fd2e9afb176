/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Hours color:
/// \>0 → green
/// \<0 → red
/// 0 → grey
pub fn color_for_hours(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        GREY
    }
}

/// Unknown codes stand out in yellow; empty cells are grey.
pub fn color_for_code(code: &str, known: bool) -> &'static str {
    if code.trim().is_empty() {
        GREY
    } else if known {
        RESET
    } else {
        YELLOW
    }
}
