//! Parsing of the `date` type and the SEX date operators (`<<`, `>>`, `@`).
//!
//! GNU recutils delegates date parsing to glibc's `getdate`, which accepts
//! a permissive grab-bag of formats. We accept the formats most programs
//! actually emit and that are idiomatic to parse with `chrono`: RFC 3339 /
//! ISO 8601 (with or without time and offset), RFC 2822 ("Mon, 02 Jan 2006
//! 15:04:05 -0700"), and a bare `YYYY-MM-DD` date.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse `value` as a calendar date/time, returning the absolute instant it
/// denotes (naive dates are interpreted at midnight UTC).
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }

    None
}
