use crate::utils::formatting::display_width;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section title followed by a separator line of `sep` characters.
pub fn header<T: fmt::Display>(msg: T, sep: &str) {
    let title = msg.to_string();
    println!("\n{}{}{}{}", FG_BLUE, BOLD, title, RESET);
    separator(sep, display_width(&title).max(20));
}

pub fn separator(sep: &str, width: usize) {
    let ch = sep.chars().next().unwrap_or('-');
    println!("{}", ch.to_string().repeat(width));
}

/// `label: value` line for the month metrics.
pub fn metric<T: fmt::Display>(label: &str, value: T) {
    println!("{}{:<24}{} {}", BOLD, label, RESET, value);
}
