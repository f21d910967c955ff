//! Formatting helpers used at the rendering edge.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a backend timestamp as a human date, e.g. `01 March 2024`.
///
/// Accepts RFC 3339, a bare `YYYY-MM-DD HH:MM:SS`, or a bare date. The
/// raw string comes back unchanged when none of those match, which keeps
/// an odd backend value visible instead of hiding it.
#[must_use]
pub fn dateparse(raw: &str) -> String {
    const OUT: &str = "%d %B %Y";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(OUT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format(OUT).to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format(OUT).to_string();
    }
    raw.to_string()
}

/// `TK 20000 - 30000`, the currency prefix the dashboard uses throughout.
#[must_use]
pub fn salary_range(start: i64, end: i64) -> String {
    format!("TK {start} - {end}")
}

/// Salary range with the capitalized period, e.g. `TK 20000 - 30000 Monthly`.
#[must_use]
pub fn salary_with_period(start: i64, end: i64, salary_type: &str) -> String {
    let period = capitalize(salary_type);
    if period.is_empty() {
        salary_range(start, end)
    } else {
        format!("{} {period}", salary_range(start, end))
    }
}

/// Uppercase the first character, leave the rest alone.
#[must_use]
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
