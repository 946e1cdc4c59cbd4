//! Date display rules shared by every dated section.
//!
//! `YYYY-MM` becomes `MMM YYYY`. Anything unparseable is shown as typed;
//! blank input renders nothing. No function here can fail.

use chrono::NaiveDate;

pub const PRESENT: &str = "Present";
const RANGE_SEPARATOR: &str = " - ";

/// Formats a `YYYY-MM` (or `YYYY-MM-DD`) string as `MMM YYYY`.
pub fn format_month(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|_| trimmed.to_string())
}

/// End bound of a range: "Present" for ongoing entries, whatever is stored otherwise.
pub fn end_label(end: Option<&str>, is_current: bool) -> String {
    if is_current {
        PRESENT.to_string()
    } else {
        end.map(format_month).unwrap_or_default()
    }
}

/// `start - end`, dropping whichever side is blank (and the separator with it).
pub fn format_range(start: &str, end: Option<&str>, is_current: bool) -> String {
    let start = format_month(start);
    let end = end_label(end, is_current);
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start}{RANGE_SEPARATOR}{end}"),
        (false, true) => start,
        (true, false) => end,
        (true, true) => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
